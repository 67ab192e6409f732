use crate::core::{Board, BoardError, ShapeMatrix};
use crate::types::Color;

/// Why a placement was refused
///
/// Every variant is an ordinary "cannot place here" result; the board is
/// never modified when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// A filled cell would land below the last row
    RowOverflow { row: usize, col: usize },
    /// A filled cell would land past the last column
    ColOverflow { row: usize, col: usize },
    /// A filled cell would cover an already painted cell
    Collision { row: usize, col: usize },
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::RowOverflow { .. } | PlaceError::ColOverflow { .. } => "out_of_bounds",
            PlaceError::Collision { .. } => "collision",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::RowOverflow { .. } => "shape would extend past the last row",
            PlaceError::ColOverflow { .. } => "shape would extend past the last column",
            PlaceError::Collision { .. } => "shape would overlap painted cells",
        }
    }

    /// The first offending target cell (may lie off the board)
    pub fn cell(self) -> (usize, usize) {
        match self {
            PlaceError::RowOverflow { row, col }
            | PlaceError::ColOverflow { row, col }
            | PlaceError::Collision { row, col } => (row, col),
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (row, col) = self.cell();
        write!(f, "{} at ({row}, {col})", self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Board cells `shape` would cover when anchored at `(anchor_row, anchor_col)`
///
/// Validates every filled cell before returning; nothing is written. Only
/// upper bounds are checked: coordinates are unsigned, and an anchor sum that
/// overflows `usize` is reported as an overflow of that axis.
pub fn check_placement(
    board: &Board,
    shape: &ShapeMatrix,
    anchor_row: usize,
    anchor_col: usize,
) -> Result<Vec<(usize, usize)>, PlaceError> {
    let mut targets = Vec::with_capacity(shape.filled_count());
    for (dr, dc) in shape.filled_cells() {
        let row = anchor_row.checked_add(dr);
        let col = anchor_col.checked_add(dc);
        let (row, col) = match (row, col) {
            (Some(row), Some(col)) => (row, col),
            (None, col) => {
                return Err(PlaceError::RowOverflow {
                    row: usize::MAX,
                    col: col.unwrap_or(usize::MAX),
                })
            }
            (Some(row), None) => {
                return Err(PlaceError::ColOverflow {
                    row,
                    col: usize::MAX,
                })
            }
        };

        if !board.contains(row, col) {
            return Err(out_of_bounds(board, row, col));
        }
        if !board.is_empty_at(row, col) {
            return Err(PlaceError::Collision { row, col });
        }
        targets.push((row, col));
    }
    Ok(targets)
}

/// Stamp `shape` onto the board in `color`, all or nothing
///
/// On success every filled cell of the shape is painted and nothing else
/// changes; returns the number of cells painted. On error the board is left
/// untouched.
pub fn place(
    board: &mut Board,
    shape: &ShapeMatrix,
    anchor_row: usize,
    anchor_col: usize,
    color: Color,
) -> Result<usize, PlaceError> {
    let targets = check_placement(board, shape, anchor_row, anchor_col)?;
    for &(row, col) in &targets {
        board
            .set(row, col, Some(color))
            .map_err(|_| out_of_bounds(board, row, col))?;
    }
    Ok(targets.len())
}

/// Overflow on whichever axis `(row, col)` leaves the board
fn out_of_bounds(board: &Board, row: usize, col: usize) -> PlaceError {
    if row >= board.rows() {
        PlaceError::RowOverflow { row, col }
    } else {
        PlaceError::ColOverflow { row, col }
    }
}

/// Reset a single cell to empty
///
/// Erasing an empty cell is a no-op. Returns whether the cell was painted.
pub fn erase(board: &mut Board, row: usize, col: usize) -> Result<bool, BoardError> {
    let was_painted = board.get(row, col)?.is_some();
    board.set(row, col, None)?;
    Ok(was_painted)
}

/// A fresh empty board; same as [`Board::empty`]
pub fn clear(rows: usize, cols: usize) -> Board {
    Board::empty(rows, cols)
}
