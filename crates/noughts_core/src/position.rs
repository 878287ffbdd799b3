//! Board positions numbered 1-9, as typed on a number pad.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the 3x3 board, numbered 1-9 in row-major order.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
///
/// The mapping to `(row, col)` is `row = (n - 1) / 3`, `col = (n - 1) % 3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

/// Errors produced when building a [`Position`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PositionError {
    /// Input was not a decimal integer.
    #[display("'{input}' is not a number")]
    NotANumber {
        /// The rejected input, trimmed.
        input: String,
    },
    /// Number outside 1-9.
    #[display("position {value} is outside 1-9")]
    OutOfRange {
        /// The rejected value.
        value: i64,
    },
    /// Row or column outside 0-2.
    #[display("cell ({row}, {col}) is off the board")]
    OffBoard {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl Position {
    /// All nine positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Creates a position from its number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfRange`] for anything outside 1-9.
    #[instrument]
    pub fn new(number: i64) -> Result<Self, PositionError> {
        if (1..=9).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(PositionError::OutOfRange { value: number })
        }
    }

    /// Creates a position from zero-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OffBoard`] if either index is outside 0-2.
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, PositionError> {
        if row > 2 || col > 2 {
            return Err(PositionError::OffBoard { row, col });
        }
        Ok(Self((row * 3 + col + 1) as u8))
    }

    /// The number shown to the player (1-9).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based board index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Zero-based `(row, col)` pair.
    pub fn row_col(self) -> (usize, usize) {
        (self.row(), self.col())
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: i64 = trimmed.parse().map_err(|_| PositionError::NotANumber {
            input: trimmed.to_string(),
        })?;
        Self::new(number)
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}
