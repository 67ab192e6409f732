//! Board text codec.
//!
//! A board is stored as a JSON array of rows, each cell either `null` or a
//! lowercase color name:
//!
//! ```text
//! [[null,"cyan","cyan"],[null,null,"red"]]
//! ```
//!
//! Decoding is strict: anything that is not a rectangular grid of known
//! colors with the expected dimensions is rejected as a corrupt payload.

use thiserror::Error;

use crate::core::Board;
use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("corrupt board payload: {0}")]
    CorruptPayload(String),
    #[error("could not encode board: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Encode the full grid as text
pub fn serialize(board: &Board) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&board.to_rows())?)
}

/// Decode a default-size (20x12) board
pub fn deserialize(text: &str) -> Result<Board, CodecError> {
    deserialize_sized(text, BOARD_ROWS, BOARD_COLS)
}

/// Decode a board that must be exactly `rows x cols`
pub fn deserialize_sized(text: &str, rows: usize, cols: usize) -> Result<Board, CodecError> {
    let grid: Vec<Vec<Cell>> =
        serde_json::from_str(text).map_err(|e| CodecError::CorruptPayload(e.to_string()))?;
    Board::from_rows_sized(grid, rows, cols).map_err(|e| CodecError::CorruptPayload(e.to_string()))
}
