//! Morra game coordinator.
//!
//! Runs one or more games against a roster of player services, asking each
//! player for a turn every round and judging the results. Players are
//! reached over their HTTP endpoints; see the `morra-player` crate for the
//! stock service.

mod config;
mod game;
mod turn_source;

use std::time::Duration;

use clap::Parser;
use config::{build_roster, GameOptions, PlayerSpec};
use game::Game;
use morra_lib::player::Player;
use morra_lib::round::WinRule;
use turn_source::HttpTurnSource;

#[derive(Parser)]
#[command(name = "morra-coordinator")]
#[command(about = "Round-by-round coordinator for games of Morra")]
struct Args {
    /// Player services as name=url pairs, in seating order (repeatable)
    #[arg(short, long = "player", required = true)]
    players: Vec<PlayerSpec>,

    /// Number of games to run back to back
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Round wins needed to take a game
    #[arg(short = 't', long, default_value_t = morra_lib::DEFAULT_WIN_THRESHOLD)]
    threshold: u32,

    /// How round points are awarded when calls match the total
    #[arg(long, default_value_t = WinRule::default())]
    win_rule: WinRule,

    /// Seconds to wait between games
    #[arg(short, long, default_value_t = 0)]
    delay: u64,

    /// Per turn-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = GameOptions {
        win_threshold: args.threshold,
        win_rule: args.win_rule,
    };
    let source = HttpTurnSource::new(Duration::from_secs(args.timeout))?;

    let mut aborted = 0u32;
    for game_no in 1..=args.games {
        // Fresh roster per game so scores reset between games
        let mut game = Game::new(source.clone(), build_roster(&args.players), options);
        match game.play().await {
            Ok(winner) => print_summary(game_no, &winner, game.players(), game.summary().len()),
            Err(error) => {
                aborted += 1;
                let error = anyhow::Error::new(error);
                tracing::error!("game {game_no} aborted: {error:#}");
            }
        }

        if game_no != args.games && args.delay > 0 {
            tokio::time::sleep(Duration::from_secs(args.delay)).await;
        }
    }

    if aborted > 0 {
        anyhow::bail!("{aborted} of {} games aborted", args.games);
    }
    Ok(())
}

fn print_summary(game_no: u32, winner: &Player, players: &[Player], rounds: usize) {
    println!("\n=== Game {game_no} ===");
    println!("Winner: {} after {rounds} round(s)", winner.name);
    for player in players {
        println!("  {:<20} {}", player.name, player.score);
    }
}
