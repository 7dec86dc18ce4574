//! Stock Morra player service.
//!
//! Answers the coordinator's turn requests with a random throw and a
//! strategy-driven call, and acknowledges round-record notifications.

mod routes;
mod strategy;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use morra_lib::net;
use routes::PlayerState;
use strategy::Strategy;

const DEFAULT_PORT: u16 = 8000;

#[derive(Parser)]
#[command(name = "morra-player")]
#[command(about = "HTTP player service for games of Morra")]
struct Args {
    /// Display name reported back to the coordinator
    #[arg(short, long)]
    name: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Call strategy
    #[arg(short, long, value_enum, default_value = "random")]
    strategy: Strategy,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let state = Arc::new(PlayerState {
        name: args.name,
        strategy: args.strategy,
    });

    let app = Router::new()
        .route(net::TURN_PATH, post(routes::take_turn))
        .route(net::RECORD_PATH, post(routes::record))
        .route(net::READY_PATH, get(routes::ready))
        .with_state(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!(player = %state.name, strategy = ?state.strategy, "listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
