//! Tests for board positions and the empty-cell listing.

use noughts_and_crosses::{Board, Mark, Position};

#[test]
fn test_position_to_row_col() {
    assert_eq!(Position::new(1).unwrap().row_col(), (0, 0));
    assert_eq!(Position::new(5).unwrap().row_col(), (1, 1));
    assert_eq!(Position::new(9).unwrap().row_col(), (2, 2));
}

#[test]
fn test_position_from_row_col() {
    assert_eq!(Position::from_row_col(0, 0).unwrap().number(), 1);
    assert_eq!(Position::from_row_col(1, 1).unwrap().number(), 5);
    assert_eq!(Position::from_row_col(2, 2).unwrap().number(), 9);
    assert!(Position::from_row_col(0, 3).is_err());
}

#[test]
fn test_empty_positions_on_empty_board() {
    let board = Board::new();
    assert_eq!(board.empty_positions(), Position::ALL.to_vec());
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut board = Board::new();
    board.place(Position::new(1).unwrap(), Mark::X);
    board.place(Position::new(5).unwrap(), Mark::O);

    let empty = board.empty_positions();
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Position::new(1).unwrap()));
    assert!(!empty.contains(&Position::new(5).unwrap()));
    assert!(empty.contains(&Position::new(9).unwrap()));
}
