use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{GameId, PlayerId};

/// One player's contribution to a round: the fingers they showed and their
/// guess at the round total. Both are opaque integers here — range policy
/// (1..=5 in the stock strategies) belongs to the player services.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Turn {
    pub player_id: PlayerId,
    pub throw: i64,
    pub call: i64,
}

/// How a round's point is awarded when calls match the throw total.
///
/// The two reference coordinators disagreed on this, so it is a named
/// option rather than a fixed behavior.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinRule {
    /// Every player whose call equals the throw total scores a point.
    #[default]
    AllCorrect,
    /// A point is awarded only when exactly one player guessed correctly.
    UniqueWinner,
}

impl Display for WinRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinRule::AllCorrect => f.write_str("all-correct"),
            WinRule::UniqueWinner => f.write_str("unique-winner"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown win rule '{0}', expected 'all-correct' or 'unique-winner'")]
pub struct ParseWinRuleError(String);

impl FromStr for WinRule {
    type Err = ParseWinRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-correct" => Ok(WinRule::AllCorrect),
            "unique-winner" => Ok(WinRule::UniqueWinner),
            other => Err(ParseWinRuleError(other.to_owned())),
        }
    }
}

/// The outcome of judging one complete set of turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub throw_total: i64,
    pub correct_guesses: u32,
    /// Players awarded a point this round, in roster order.
    pub winners: Vec<PlayerId>,
}

/// Judge a finalized round: total the throws, find every call that matched
/// the total, and pick the winners per `rule`.
///
/// Pure over the turn data; callers are responsible for only judging once
/// every player's turn has been collected.
pub fn judge(turns: &[Turn], rule: WinRule) -> Judgement {
    let throw_total = turns.iter().map(|t| t.throw).sum();
    let correct: Vec<PlayerId> = turns
        .iter()
        .filter(|t| t.call == throw_total)
        .map(|t| t.player_id)
        .collect();

    let winners = match rule {
        WinRule::AllCorrect => correct.clone(),
        WinRule::UniqueWinner if correct.len() == 1 => correct.clone(),
        WinRule::UniqueWinner => Vec::new(),
    };

    Judgement {
        throw_total,
        correct_guesses: correct.len() as u32,
        winners,
    }
}

/// A single turn as it appears in a finalized round snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TurnRecord {
    pub player_id: PlayerId,
    pub player_name: String,
    pub throw: i64,
    pub call: i64,
}

/// Immutable snapshot of a judged round. Doubles as the notification body
/// posted back to each player after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoundRecord {
    pub game_id: GameId,
    pub round_no: u32,
    pub throw_total: i64,
    pub correct_guesses: u32,
    /// One record per player, in roster order.
    pub turns: Vec<TurnRecord>,
}
