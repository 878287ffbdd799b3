//! Command-line interface for noughts_and_crosses.

use clap::Parser;
use std::path::PathBuf;

/// Noughts and Crosses - play against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts_and_crosses")]
#[command(about = "Console noughts and crosses with a saved leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Leaderboard file, overriding the config
    #[arg(short, long)]
    pub leaderboard: Option<PathBuf>,

    /// Seed for the computer's moves, overriding the config
    #[arg(long)]
    pub seed: Option<u64>,
}
