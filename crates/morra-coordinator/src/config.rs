use std::collections::HashSet;
use std::str::FromStr;

use morra_lib::player::Player;
use morra_lib::round::WinRule;
use morra_lib::{PlayerId, DEFAULT_WIN_THRESHOLD};
use rand::{thread_rng, Rng};
use thiserror::Error;

/// Per-game rules. Fixed for the lifetime of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub win_threshold: u32,
    pub win_rule: WinRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            win_rule: WinRule::default(),
        }
    }
}

/// One `name=url` roster entry from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected 'name=url', got '{0}'")]
pub struct ParsePlayerSpecError(String);

impl FromStr for PlayerSpec {
    type Err = ParsePlayerSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, endpoint) = s
            .split_once('=')
            .ok_or_else(|| ParsePlayerSpecError(s.to_owned()))?;
        if name.is_empty() || endpoint.is_empty() {
            return Err(ParsePlayerSpecError(s.to_owned()));
        }
        Ok(Self {
            name: name.to_owned(),
            endpoint: endpoint.to_owned(),
        })
    }
}

/// Build a fresh roster with unique ids. Each game gets its own roster so
/// scores never leak between game instances.
pub fn build_roster(specs: &[PlayerSpec]) -> Vec<Player> {
    let mut taken = HashSet::new();
    specs
        .iter()
        .map(|spec| Player::new(gen_player_id(&mut taken), spec.name.clone(), spec.endpoint.clone()))
        .collect()
}

fn gen_player_id(taken: &mut HashSet<PlayerId>) -> PlayerId {
    let mut player_id;
    loop {
        player_id = thread_rng().gen::<u32>().into();
        if taken.insert(player_id) {
            break;
        }
    }
    player_id
}
