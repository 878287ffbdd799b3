//! Pure noughts and crosses game logic.
//!
//! This crate has no terminal I/O. It provides the board data model, the
//! win/draw evaluator and the move selector seam used by the turn loop in
//! the `noughts_and_crosses` application crate.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Mark, Position, rules};
//!
//! let mut board = Board::new();
//! for n in 1..=3 {
//!     board.place(Position::new(n)?, Mark::X);
//! }
//! assert!(rules::has_won(&board, Mark::X));
//! assert!(!rules::has_won(&board, Mark::O));
//! # Ok::<(), noughts_core::PositionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod position;
pub mod rules;
mod selector;
mod types;

pub use outcome::GameResult;
pub use position::{Position, PositionError};
pub use selector::{MoveSelector, RandomSelector, SelectError};
pub use types::{Board, BoardError, Cell, Mark};
