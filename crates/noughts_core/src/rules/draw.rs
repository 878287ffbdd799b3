//! Draw detection.

use crate::Board;
use tracing::instrument;

/// Whether no empty cell remains.
///
/// This does not look for lines. Check [`has_won`](super::has_won) first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.empty_count() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_iff_no_empty_cells() {
        // Walk all 2^9 occupancy patterns; which mark fills a cell is irrelevant.
        for pattern in 0u16..512 {
            let mut board = Board::new();
            for (i, pos) in Position::ALL.into_iter().enumerate() {
                if pattern & (1 << i) != 0 {
                    let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
                    board.place(pos, mark);
                }
            }
            assert_eq!(is_draw(&board), pattern == 511, "pattern {pattern:09b}");
        }
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        #[rustfmt::skip]
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, mark);
        }
        assert!(is_draw(&board));
        assert_eq!(super::super::winner(&board), None);
    }
}
