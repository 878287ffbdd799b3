//! Noughts and crosses against a random computer opponent.
//!
//! The game logic lives in [`noughts_core`]; this crate adds the console,
//! the turn loop, the leaderboard file and the menu session.
//!
//! # Architecture
//!
//! - **Controller**: alternates human and computer moves until a win or draw
//! - **Console**: prompts, move input and the board view
//! - **Leaderboard**: name to score map stored as a JSON object
//! - **Session**: menu loop keeping a running score
//!
//! # Example
//!
//! ```no_run
//! use noughts_and_crosses::{Console, GameController, LeaderboardStore, RandomSelector, Session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let console = Console::new(std::io::stdin().lock(), std::io::stdout());
//! let controller = GameController::new(RandomSelector::from_os_rng());
//! let mut session = Session::new(console, controller, LeaderboardStore::new("leaderboard.txt"));
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod controller;
mod leaderboard;
mod session;

pub use config::{ConfigError, GameConfig};
pub use console::{Console, GameView};
pub use controller::{GameController, GameError};
pub use leaderboard::{Leaderboard, LeaderboardError, LeaderboardStore};
pub use session::{MenuChoice, Session};

pub use noughts_core::{
    Board, BoardError, Cell, GameResult, Mark, MoveSelector, Position, PositionError,
    RandomSelector, SelectError, rules,
};
