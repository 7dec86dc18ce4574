use futures::future::{join_all, try_join_all};
use morra_lib::net::TurnRequest;
use morra_lib::player::Player;
use morra_lib::round::{self, RoundRecord, TurnRecord};
use morra_lib::GameId;
use rand::{thread_rng, Rng};
use thiserror::Error;
use tracing::instrument;

use crate::config::GameOptions;
use crate::turn_source::{TurnError, TurnSource};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("round {round_no} could not be judged")]
    Round {
        round_no: u32,
        #[source]
        source: TurnError,
    },
}

pub type GameResult<T> = Result<T, GameError>;

/// One game: a fixed roster played round by round until somebody reaches
/// the win threshold.
///
/// A round that cannot be judged (any turn failed) aborts the whole game;
/// partial rounds are never scored or recorded.
pub struct Game<S> {
    id: GameId,
    options: GameOptions,
    players: Vec<Player>,
    rounds: Vec<RoundRecord>,
    turns: S,
}

impl<S: TurnSource> Game<S> {
    pub fn new(turns: S, players: Vec<Player>, options: GameOptions) -> Self {
        Self {
            id: thread_rng().gen::<u32>().into(),
            options,
            players,
            rounds: Vec::new(),
            turns,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Ordered history of every judged round so far.
    pub fn summary(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Run rounds until a player reaches the win threshold and return the
    /// winner.
    #[instrument(skip_all, fields(game_id = %self.id))]
    pub async fn play(&mut self) -> GameResult<Player> {
        tracing::info!(
            players = self.players.len(),
            threshold = self.options.win_threshold,
            rule = %self.options.win_rule,
            "game started"
        );

        loop {
            let round_no = self.rounds.len() as u32 + 1;
            let record = self.play_round(round_no).await?;
            self.rounds.push(record);

            if let Some(winner) = self
                .players
                .iter()
                .find(|p| p.score >= self.options.win_threshold)
            {
                tracing::info!(winner = %winner.name, rounds = self.rounds.len(), "game won");
                return Ok(winner.clone());
            }
        }
    }

    /// Collect one turn per player, judge, score, and notify.
    ///
    /// Turn requests fan out concurrently but the round is only judged once
    /// every response is in; records are stored in roster order no matter
    /// which player answered first.
    #[instrument(skip(self))]
    async fn play_round(&mut self, round_no: u32) -> GameResult<RoundRecord> {
        let request = TurnRequest {
            game_id: self.id,
            round_no,
            player_count: self.players.len() as u32,
        };

        let turns = try_join_all(
            self.players
                .iter()
                .map(|player| self.turns.take_turn(player, request)),
        )
        .await
        .map_err(|source| GameError::Round { round_no, source })?;

        let judgement = round::judge(&turns, self.options.win_rule);
        tracing::info!(
            throw_total = judgement.throw_total,
            correct_guesses = judgement.correct_guesses,
            "round judged"
        );

        for winner in &judgement.winners {
            if let Some(player) = self.players.iter_mut().find(|p| p.id == *winner) {
                player.win();
                tracing::info!(player = %player.name, score = player.score, "round won");
            }
        }

        let record = RoundRecord {
            game_id: self.id,
            round_no,
            throw_total: judgement.throw_total,
            correct_guesses: judgement.correct_guesses,
            turns: self
                .players
                .iter()
                .zip(&turns)
                .map(|(player, turn)| TurnRecord {
                    player_id: player.id,
                    player_name: player.name.clone(),
                    throw: turn.throw,
                    call: turn.call,
                })
                .collect(),
        };

        self.notify_players(&record).await;
        Ok(record)
    }

    /// Fire-and-forget delivery of the finalized record to every player.
    /// The round result is already authoritative, so failures only warn.
    async fn notify_players(&self, record: &RoundRecord) {
        let results = join_all(
            self.players
                .iter()
                .map(|player| self.turns.post_record(player, record)),
        )
        .await;

        for (player, result) in self.players.iter().zip(results) {
            if let Err(error) = result {
                tracing::warn!(player = %player.name, %error, "failed to deliver round record");
            }
        }
    }
}
