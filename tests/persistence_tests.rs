//! Persistence bridge tests - board text round-trips and corrupt payloads

use tetris_art::adapter::{deserialize, deserialize_sized, serialize, CodecError};
use tetris_art::core::Board;
use tetris_art::types::{Color, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_round_trip_empty_board() {
    let board = Board::new();
    let text = serialize(&board).unwrap();
    assert_eq!(deserialize(&text).unwrap(), board);
}

#[test]
fn test_round_trip_full_board() {
    let mut board = Board::new();
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            board.set(row, col, Some(Color::Orange)).unwrap();
        }
    }
    let text = serialize(&board).unwrap();
    assert_eq!(deserialize(&text).unwrap(), board);
}

#[test]
fn test_round_trip_mixed_colors() {
    let mut board = Board::new();
    for (i, color) in Color::ALL.into_iter().enumerate() {
        board.set(i, i, Some(color)).unwrap();
        board.set(BOARD_ROWS - 1 - i, BOARD_COLS - 1 - i, Some(color)).unwrap();
    }
    let text = serialize(&board).unwrap();
    assert_eq!(deserialize(&text).unwrap(), board);
}

#[test]
fn test_text_form_is_nested_json_rows() {
    let mut board = Board::empty(2, 2);
    board.set(0, 1, Some(Color::Cyan)).unwrap();

    let text = serialize(&board).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!([[null, "cyan"], [null, null]]));
}

#[test]
fn test_corrupt_payloads() {
    for text in [
        "",
        "null",
        "{}",
        "[]",
        r#"[[1,2,3]]"#,
        r#"[["cyan"]]"#,
    ] {
        assert!(
            matches!(deserialize(text), Err(CodecError::CorruptPayload(_))),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn test_wrong_dimensions_are_corrupt() {
    let small = serialize(&Board::empty(3, 3)).unwrap();
    assert!(matches!(
        deserialize(&small),
        Err(CodecError::CorruptPayload(_))
    ));
    assert_eq!(deserialize_sized(&small, 3, 3).unwrap(), Board::empty(3, 3));
}
