use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use morra_lib::net::{TurnRequest, TurnResponse};
use morra_lib::round::RoundRecord;

use crate::strategy::{self, Strategy};

/// Identity and policy shared by all handlers.
pub struct PlayerState {
    pub name: String,
    pub strategy: Strategy,
}

/// `POST /v1/turn` — produce a throw and a call for one round.
pub async fn take_turn(
    State(state): State<Arc<PlayerState>>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, (StatusCode, String)> {
    if let Err(error) = request.validate() {
        tracing::warn!(%error, "rejecting turn request");
        return Err((StatusCode::BAD_REQUEST, error.to_string()));
    }

    let throw = strategy::make_throw();
    let call = state.strategy.make_call(throw, request.player_count);
    tracing::info!(
        game_id = %request.game_id,
        round_no = request.round_no,
        throw,
        call,
        "turn taken"
    );

    Ok(Json(TurnResponse {
        game_id: request.game_id,
        round_no: request.round_no,
        player: state.name.clone(),
        throw,
        call,
    }))
}

/// `POST /v1/record` — receive the coordinator's record of a judged round.
/// Nothing is persisted; the record is logged and acknowledged.
pub async fn record(Json(record): Json<RoundRecord>) -> StatusCode {
    tracing::info!(
        game_id = %record.game_id,
        round_no = record.round_no,
        throw_total = record.throw_total,
        correct_guesses = record.correct_guesses,
        "round record received"
    );
    StatusCode::NO_CONTENT
}

/// `GET /ready` — liveness probe.
pub async fn ready() -> Json<bool> {
    Json(true)
}
