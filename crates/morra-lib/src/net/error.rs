use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GameId;

#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("round number must be at least 1")]
    RoundNumberZero,
    #[error("player count must be at least 1")]
    PlayerCountZero,
    #[error("response echoed game {got} but the request was for game {want}")]
    GameMismatch { want: GameId, got: GameId },
    #[error("response echoed round {got} but the request was for round {want}")]
    RoundMismatch { want: u32, got: u32 },
}
