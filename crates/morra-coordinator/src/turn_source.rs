use std::time::Duration;

use async_trait::async_trait;
use morra_lib::net::{self, ProtocolError, TurnRequest, TurnResponse};
use morra_lib::player::Player;
use morra_lib::round::{RoundRecord, Turn};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TurnError {
    #[error("turn request to '{player}' failed")]
    Transport {
        player: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("player '{player}' answered with status {status}")]
    Status { player: String, status: StatusCode },
    #[error("player '{player}' returned an unusable turn")]
    Protocol {
        player: String,
        #[source]
        source: ProtocolError,
    },
}

/// Where a round gets its turns from. Judging never touches the network
/// directly; it asks one of these for each player's turn instead.
#[async_trait]
pub trait TurnSource {
    /// Obtain one turn for `player`. Any failure makes the turn unusable;
    /// there is no default value to fall back to.
    async fn take_turn(&self, player: &Player, request: TurnRequest) -> Result<Turn, TurnError>;

    /// Deliver the finalized round record to `player`. Best-effort only;
    /// callers log failures and move on.
    async fn post_record(&self, player: &Player, record: &RoundRecord) -> Result<(), TurnError>;
}

/// Turn source backed by the players' HTTP endpoints.
#[derive(Debug, Clone)]
pub struct HttpTurnSource {
    client: reqwest::Client,
}

impl HttpTurnSource {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn url(player: &Player, path: &str) -> String {
        format!("{}{}", player.endpoint.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl TurnSource for HttpTurnSource {
    async fn take_turn(&self, player: &Player, request: TurnRequest) -> Result<Turn, TurnError> {
        let response = self
            .client
            .post(Self::url(player, net::TURN_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|source| TurnError::Transport {
                player: player.name.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TurnError::Status {
                player: player.name.clone(),
                status,
            });
        }

        let reply: TurnResponse =
            response
                .json()
                .await
                .map_err(|source| TurnError::Transport {
                    player: player.name.clone(),
                    source,
                })?;
        reply
            .correlate(&request)
            .map_err(|source| TurnError::Protocol {
                player: player.name.clone(),
                source,
            })?;

        tracing::debug!(player = %player.name, throw = reply.throw, call = reply.call, "turn received");
        Ok(Turn {
            player_id: player.id,
            throw: reply.throw,
            call: reply.call,
        })
    }

    async fn post_record(&self, player: &Player, record: &RoundRecord) -> Result<(), TurnError> {
        let response = self
            .client
            .post(Self::url(player, net::RECORD_PATH))
            .json(record)
            .send()
            .await
            .map_err(|source| TurnError::Transport {
                player: player.name.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TurnError::Status {
                player: player.name.clone(),
                status,
            });
        }
        Ok(())
    }
}
