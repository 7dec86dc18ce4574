use serde::{Deserialize, Serialize};

use super::ProtocolError;
use crate::GameId;

/// Body of `POST /v1/turn`: the coordinator asking a player for one turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TurnRequest {
    pub game_id: GameId,
    pub round_no: u32,
    pub player_count: u32,
}

impl TurnRequest {
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.round_no < 1 {
            return Err(ProtocolError::RoundNumberZero);
        }
        if self.player_count < 1 {
            return Err(ProtocolError::PlayerCountZero);
        }
        Ok(())
    }
}

/// Body of a player's reply to a turn request. The game id and round number
/// echo the request so the coordinator can reject crossed wires.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TurnResponse {
    pub game_id: GameId,
    pub round_no: u32,
    /// The responding service's display name.
    pub player: String,
    pub throw: i64,
    pub call: i64,
}

impl TurnResponse {
    /// Check the correlation fields against the request this is a reply to.
    pub fn correlate(&self, request: &TurnRequest) -> Result<(), ProtocolError> {
        if self.game_id != request.game_id {
            return Err(ProtocolError::GameMismatch {
                want: request.game_id,
                got: self.game_id,
            });
        }
        if self.round_no != request.round_no {
            return Err(ProtocolError::RoundMismatch {
                want: request.round_no,
                got: self.round_no,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{TurnRequest, TurnResponse};
    use crate::net::ProtocolError;

    fn request() -> TurnRequest {
        TurnRequest {
            game_id: 0xBEEF.into(),
            round_no: 2,
            player_count: 3,
        }
    }

    #[test]
    fn canonical_request_shape() {
        let encoded = serde_json::to_value(request()).unwrap();
        assert_eq!(
            encoded,
            json!({ "game_id": 0xBEEF, "round_no": 2, "player_count": 3 })
        );
    }

    #[test]
    fn canonical_response_shape() {
        let response = TurnResponse {
            game_id: 0xBEEF.into(),
            round_no: 2,
            player: "go_player".to_owned(),
            throw: 4,
            call: 11,
        };
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(
            encoded,
            json!({
                "game_id": 0xBEEF,
                "round_no": 2,
                "player": "go_player",
                "throw": 4,
                "call": 11,
            })
        );
    }

    #[test]
    fn validate_rejects_zero_fields() {
        let mut bad = request();
        bad.round_no = 0;
        assert_eq!(bad.validate(), Err(ProtocolError::RoundNumberZero));

        let mut bad = request();
        bad.player_count = 0;
        assert_eq!(bad.validate(), Err(ProtocolError::PlayerCountZero));

        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn correlate_rejects_crossed_replies() {
        let request = request();
        let mut response = TurnResponse {
            game_id: request.game_id,
            round_no: request.round_no,
            player: "p".to_owned(),
            throw: 1,
            call: 2,
        };
        assert_eq!(response.correlate(&request), Ok(()));

        response.round_no = 9;
        assert_eq!(
            response.correlate(&request),
            Err(ProtocolError::RoundMismatch { want: 2, got: 9 })
        );

        response.round_no = request.round_no;
        response.game_id = 0xF00D.into();
        assert!(matches!(
            response.correlate(&request),
            Err(ProtocolError::GameMismatch { .. })
        ));
    }
}
