use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// One seat in a game's roster.
///
/// The endpoint is the base URL of the service that produces this player's
/// turns; the coordinator never generates throws or calls itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub endpoint: String,
    pub score: u32,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            endpoint: endpoint.into(),
            score: 0,
        }
    }

    /// Award this player the round that was just judged.
    pub fn win(&mut self) {
        self.score += 1;
    }
}
