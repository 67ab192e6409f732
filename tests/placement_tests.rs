//! Placement engine tests - all-or-nothing stamping, bounds and collisions

use tetris_art::core::{Board, ShapeLibrary, ShapeMatrix};
use tetris_art::engine::{clear, erase, place, PlaceError};
use tetris_art::types::{Color, Rotation, BOARD_COLS, BOARD_ROWS};

fn active(name: &str, turns: u32) -> &'static ShapeMatrix {
    ShapeLibrary::builtin()
        .lookup(name)
        .unwrap()
        .active(Rotation::new(turns))
}

#[test]
fn test_place_i_then_reject_same_anchor() {
    let mut board = Board::new();
    let i = active("I", 0);

    assert_eq!(place(&mut board, i, 0, 0, Color::Cyan), Ok(4));
    for col in 0..4 {
        assert_eq!(board.get(0, col), Ok(Some(Color::Cyan)));
    }
    assert_eq!(board.get(0, 4), Ok(None));
    assert_eq!(board.filled_count(), 4);

    let before = board.clone();
    let err = place(&mut board, i, 0, 0, Color::Red).unwrap_err();
    assert_eq!(err, PlaceError::Collision { row: 0, col: 0 });
    assert_eq!(err.code(), "collision");
    assert_eq!(board, before);
}

#[test]
fn test_reject_one_past_last_column() {
    let mut board = Board::new();
    let i = active("I", 0);

    // Rightmost cell would land on column 12.
    let err = place(&mut board, i, 5, BOARD_COLS - 3, Color::Green).unwrap_err();
    assert_eq!(
        err,
        PlaceError::ColOverflow {
            row: 5,
            col: BOARD_COLS
        }
    );
    assert_eq!(err.code(), "out_of_bounds");
    assert!(board.is_blank());

    // Flush against the right edge fits.
    assert_eq!(place(&mut board, i, 5, BOARD_COLS - 4, Color::Green), Ok(4));
}

#[test]
fn test_reject_past_last_row() {
    let mut board = Board::new();
    let vertical = active("I", 1);

    let err = place(&mut board, vertical, BOARD_ROWS - 3, 0, Color::Yellow).unwrap_err();
    assert!(matches!(err, PlaceError::RowOverflow { row, .. } if row == BOARD_ROWS));
    assert!(board.is_blank());
}

#[test]
fn test_partial_overlap_writes_nothing() {
    let mut board = Board::new();
    board.set(1, 2, Some(Color::Purple)).unwrap();
    let before = board.clone();

    // T: [[1,1,1],[0,1,0]] at (0,1) covers (1,2).
    let t = active("T", 0);
    assert!(place(&mut board, t, 0, 1, Color::Orange).is_err());
    assert_eq!(board, before);
}

#[test]
fn test_place_only_touches_filled_cells() {
    let mut board = Board::new();
    board.set(0, 1, Some(Color::Red)).unwrap();

    // J: [[1,0,0],[1,1,1]]; the hole at (0,1) must keep its red paint.
    let j = active("J", 0);
    assert_eq!(place(&mut board, j, 0, 0, Color::Cyan), Ok(4));
    assert_eq!(board.get(0, 1), Ok(Some(Color::Red)));
    assert_eq!(board.get(0, 0), Ok(Some(Color::Cyan)));
    assert_eq!(board.get(1, 2), Ok(Some(Color::Cyan)));
}

#[test]
fn test_huge_anchor_is_rejected_not_wrapped() {
    let mut board = Board::new();
    let i = active("I", 0);
    assert!(place(&mut board, i, 0, usize::MAX, Color::Cyan).is_err());
    assert!(place(&mut board, i, usize::MAX, 0, Color::Cyan).is_err());
    assert!(board.is_blank());
}

#[test]
fn test_erase_empty_cell_is_noop() {
    let mut board = Board::new();
    let before = board.clone();
    assert_eq!(erase(&mut board, 3, 3), Ok(false));
    assert_eq!(board, before);
}

#[test]
fn test_erase_painted_cell() {
    let mut board = Board::new();
    board.set(3, 3, Some(Color::Red)).unwrap();
    assert_eq!(erase(&mut board, 3, 3), Ok(true));
    assert!(board.is_blank());
    assert!(erase(&mut board, BOARD_ROWS, 0).is_err());
}

#[test]
fn test_clear_is_empty_board() {
    assert_eq!(clear(BOARD_ROWS, BOARD_COLS), Board::new());
}
