//! Noughts and Crosses - console game binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts_and_crosses::{
    Console, GameConfig, GameController, LeaderboardStore, RandomSelector, Session,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config =
        GameConfig::load_or_default(&cli.config)?.with_overrides(cli.leaderboard, cli.seed);
    run_session(&config)
}

/// Runs the interactive menu on stdin/stdout.
#[instrument(skip(config), fields(leaderboard = %config.leaderboard_path().display()))]
fn run_session(config: &GameConfig) -> Result<()> {
    let computer = match config.seed() {
        Some(seed) => {
            info!(seed, "Using seeded computer moves");
            RandomSelector::seeded(*seed)
        }
        None => RandomSelector::from_os_rng(),
    };

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let store = LeaderboardStore::new(config.leaderboard_path().clone());
    let mut session = Session::new(console, GameController::new(computer), store);
    session.run()?;
    Ok(())
}

/// Logs go to stderr so they never mix with the game's prompts.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();
}
