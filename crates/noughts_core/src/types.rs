//! Core domain types for noughts and crosses.

use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{instrument, trace};

/// Mark placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Crosses, played by the human.
    X,
    /// Noughts, played by the computer.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str(" "),
            Cell::Occupied(mark) => write!(f, "{mark}"),
        }
    }
}

/// Structural errors on board access.
///
/// These indicate a caller bug, never bad player input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside 0-2.
    #[display("cell ({row}, {col}) is out of range")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// An externally supplied grid was not 3 rows of 3 cells.
    #[display("invalid board shape: {reason}")]
    InvalidShape {
        /// What was wrong with the grid.
        reason: String,
    },
}

const RULE: &str = "\t -----------";

/// 3x3 noughts and crosses board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a board with every cell empty.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from an externally supplied grid.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidShape`] unless the grid is exactly
    /// three rows of three cells.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, BoardError> {
        if rows.len() != 3 {
            return Err(BoardError::InvalidShape {
                reason: format!("expected 3 rows, found {}", rows.len()),
            });
        }
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 3 {
                return Err(BoardError::InvalidShape {
                    reason: format!("row {} has {} cells, expected 3", r, row.len()),
                });
            }
            board.cells[r].copy_from_slice(row);
        }
        Ok(board)
    }

    /// Renders an externally supplied grid, rejecting malformed shapes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidShape`] as for [`Board::from_rows`].
    pub fn render_rows(rows: &[Vec<Cell>]) -> Result<String, BoardError> {
        Ok(Self::from_rows(rows)?.render())
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either index is outside 0-2.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// Whether the cell at `(row, col)` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if either index is outside 0-2.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.get(row, col)? == Cell::Empty)
    }

    /// Returns the cell at a validated position.
    pub fn cell(&self, position: Position) -> Cell {
        let (row, col) = position.row_col();
        self.cells[row][col]
    }

    /// Places a mark. The caller must already have checked the cell is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, mark: Mark) {
        let (row, col) = position.row_col();
        debug_assert_eq!(
            self.cells[row][col],
            Cell::Empty,
            "placing {mark} on occupied cell {position}"
        );
        trace!(%position, %mark, "Mark placed");
        self.cells[row][col] = Cell::Occupied(mark);
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = Default::default();
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// All empty positions in ascending order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|p| self.cell(*p) == Cell::Empty)
            .collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Empty)
            .count()
    }

    /// Formats the board as a boxed grid with a rule between rows.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            out.push_str(RULE);
            out.push('\n');
            let line = row.iter().map(Cell::to_string).collect::<Vec<_>>().join(" | ");
            out.push_str(&format!("\t| {line} |\n"));
        }
        out.push_str(RULE);
        out.push('\n');
        out
    }

    /// Number-pad guide mapping positions to cells.
    pub fn layout() -> String {
        let mut out = String::new();
        for row in 0..3 {
            out.push_str(RULE);
            out.push('\n');
            let line = (1..=3)
                .map(|c| (row * 3 + c).to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            out.push_str(&format!("\t| {line} |\n"));
        }
        out.push_str(RULE);
        out.push('\n');
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: i64) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                assert!(board.is_empty(row, col).unwrap());
            }
        }
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_out_of_range_access() {
        let board = Board::new();
        assert_eq!(
            board.is_empty(3, 0),
            Err(BoardError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.get(1, 7),
            Err(BoardError::OutOfRange { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_place_fills_one_cell() {
        let mut board = Board::new();
        board.place(pos(6), Mark::O);
        assert_eq!(board.get(1, 2).unwrap(), Cell::Occupied(Mark::O));
        assert!(!board.is_empty(1, 2).unwrap());
        assert_eq!(board.empty_count(), 8);
        assert!(!board.empty_positions().contains(&pos(6)));
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.place(pos(1), Mark::X);
        board.place(pos(9), Mark::O);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render_layout() {
        let mut board = Board::new();
        board.place(pos(1), Mark::X);
        board.place(pos(5), Mark::O);
        let expected = "\t -----------\n\t| X |   |   |\n\
                        \t -----------\n\t|   | O |   |\n\
                        \t -----------\n\t|   |   |   |\n\
                        \t -----------\n";
        assert_eq!(board.render(), expected);
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_layout_numbers_cells() {
        let layout = Board::layout();
        assert!(layout.contains("| 1 | 2 | 3 |"));
        assert!(layout.contains("| 7 | 8 | 9 |"));
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        let two_rows = vec![vec![Cell::Empty; 3]; 2];
        assert!(matches!(
            Board::from_rows(&two_rows),
            Err(BoardError::InvalidShape { .. })
        ));

        let mut ragged = vec![vec![Cell::Empty; 3]; 3];
        ragged[1].pop();
        assert!(matches!(
            Board::render_rows(&ragged),
            Err(BoardError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_from_rows_accepts_square_grid() {
        let mut rows = vec![vec![Cell::Empty; 3]; 3];
        rows[2][0] = Cell::Occupied(Mark::X);
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.cell(pos(7)), Cell::Occupied(Mark::X));
        assert!(Board::render_rows(&rows).unwrap().contains("| X |   |   |"));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
