//! Board-level tests: drop mechanics and win-scan geometry.

use tui_connect4::core::Board;
use tui_connect4::types::{DropError, Player};

#[test]
fn test_discs_stack_from_the_bottom() {
    let mut board = Board::new(7, 6);

    assert_eq!(board.drop_disc(4, Player::One).unwrap(), 5);
    assert_eq!(board.drop_disc(4, Player::Two).unwrap(), 4);
    assert_eq!(board.drop_disc(4, Player::One).unwrap(), 3);

    assert_eq!(board.get(5, 4), Some(Some(Player::One)));
    assert_eq!(board.get(4, 4), Some(Some(Player::Two)));
    assert_eq!(board.get(3, 4), Some(Some(Player::One)));
    assert_eq!(board.get(2, 4), Some(None));
}

#[test]
fn test_column_fills_top_down_rejections() {
    let mut board = Board::new(7, 6);
    for _ in 0..6 {
        board.drop_disc(1, Player::Two).unwrap();
    }

    assert!(board.is_column_full(1));
    assert_eq!(
        board.drop_disc(1, Player::One),
        Err(DropError::ColumnFull(1))
    );
    // Other columns unaffected.
    assert!(!board.is_column_full(0));
}

#[test]
fn test_win_in_every_direction() {
    // Horizontal, bottom row.
    let mut board = Board::new(7, 6);
    for col in 2..6 {
        board.drop_disc(col, Player::One).unwrap();
    }
    assert!(board.has_four_in_a_row(Player::One));

    // Vertical.
    let mut board = Board::new(7, 6);
    for _ in 0..4 {
        board.drop_disc(6, Player::Two).unwrap();
    }
    assert!(board.has_four_in_a_row(Player::Two));

    // Diagonal rising to the right: staircase of Player 2 filler.
    let mut board = Board::new(7, 6);
    for (col, fillers) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
        for _ in 0..fillers {
            board.drop_disc(col, Player::Two).unwrap();
        }
        board.drop_disc(col, Player::One).unwrap();
    }
    assert!(board.has_four_in_a_row(Player::One));

    // Diagonal rising to the left.
    let mut board = Board::new(7, 6);
    for (col, fillers) in [(6, 0), (5, 1), (4, 2), (3, 3)] {
        for _ in 0..fillers {
            board.drop_disc(col, Player::Two).unwrap();
        }
        board.drop_disc(col, Player::One).unwrap();
    }
    assert!(board.has_four_in_a_row(Player::One));
}

#[test]
fn test_scan_does_not_cross_edges() {
    // Three discs at the right edge of one row plus one at the left edge
    // of the next must not read as a line of four.
    let mut board = Board::new(7, 6);
    for col in 4..7 {
        board.drop_disc(col, Player::One).unwrap();
    }
    board.drop_disc(0, Player::Two).unwrap();
    board.drop_disc(0, Player::One).unwrap();

    assert!(!board.has_four_in_a_row(Player::One));
}

#[test]
fn test_mixed_colors_break_runs() {
    let mut board = Board::new(7, 6);
    board.drop_disc(0, Player::One).unwrap();
    board.drop_disc(1, Player::One).unwrap();
    board.drop_disc(2, Player::Two).unwrap();
    board.drop_disc(3, Player::One).unwrap();
    board.drop_disc(4, Player::One).unwrap();

    assert!(!board.has_four_in_a_row(Player::One));
    assert!(!board.has_four_in_a_row(Player::Two));
}

#[test]
fn test_non_square_boards() {
    // Wide and shallow: only horizontal wins are possible.
    let mut board = Board::new(10, 2);
    for col in 0..4 {
        board.drop_disc(col, Player::One).unwrap();
    }
    assert!(board.has_four_in_a_row(Player::One));

    // Narrow and tall: only vertical wins are possible.
    let mut board = Board::new(2, 8);
    for _ in 0..4 {
        board.drop_disc(0, Player::Two).unwrap();
    }
    assert!(board.has_four_in_a_row(Player::Two));
}
