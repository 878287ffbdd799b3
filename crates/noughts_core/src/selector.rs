//! Move selectors: the seam between the turn loop and whoever picks a cell.

use crate::position::PositionError;
use crate::{Board, Position};
use derive_more::{Display, Error, From};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Errors a selector can report.
#[derive(Debug, Display, Error, From)]
pub enum SelectError {
    /// Asked to move on a full board. The turn loop never does this.
    #[display("there are no empty cells on the board")]
    #[from(ignore)]
    NoEmptyCells,
    /// The input stream ended before a valid move was read.
    #[display("input closed before a move was chosen")]
    #[from(ignore)]
    InputClosed,
    /// Reading input failed.
    #[display("failed to read move: {_0}")]
    Io(std::io::Error),
    /// A selector produced a position that does not exist.
    #[display("invalid position: {_0}")]
    Position(PositionError),
}

/// Something that chooses the next cell to play.
pub trait MoveSelector {
    /// Returns an empty position on `board`.
    ///
    /// # Errors
    ///
    /// Implementations fail only when no move can be produced at all;
    /// invalid attempts are handled internally.
    fn select(&mut self, board: &Board) -> Result<Position, SelectError>;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select(&mut self, board: &Board) -> Result<Position, SelectError> {
        (**self).select(board)
    }
}

/// Picks uniformly at random among the empty cells.
///
/// A fresh draw is made on every call from the owned generator.
#[derive(Debug, Clone)]
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Selector seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic selector for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    #[instrument(skip_all, fields(empty = tracing::field::Empty))]
    fn select(&mut self, board: &Board) -> Result<Position, SelectError> {
        let empty = board.empty_positions();
        tracing::Span::current().record("empty", empty.len());
        if empty.is_empty() {
            return Err(SelectError::NoEmptyCells);
        }
        let choice = empty[self.rng.random_range(0..empty.len())];
        debug!(position = %choice, "Computer chose position");
        Ok(choice)
    }
}
