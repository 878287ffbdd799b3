//! Win detection.

use crate::{Board, Cell, Mark, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

const fn p(n: u8) -> Position {
    Position::ALL[(n - 1) as usize]
}

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [p(1), p(2), p(3)],
    [p(4), p(5), p(6)],
    [p(7), p(8), p(9)],
    // Columns
    [p(1), p(4), p(7)],
    [p(2), p(5), p(8)],
    [p(3), p(6), p(9)],
    // Diagonals
    [p(1), p(5), p(9)],
    [p(3), p(5), p(7)],
];

/// Whether `mark` occupies a full row, column or diagonal.
#[instrument(skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.cell(*pos) == target))
}

/// The mark holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|mark| has_won(board, *mark))
}
