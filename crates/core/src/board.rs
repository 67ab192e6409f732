//! Board module - the editable pixel grid
//!
//! The board is a fixed `rows x cols` grid where each cell is empty or painted
//! with a palette color. Cells live in a flat row-major vector for cache
//! locality. Dimensions never change after creation; every access is
//! bounds-checked and reports [`BoardError::OutOfBounds`] instead of clamping.

use thiserror::Error;

use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("expected a {expected_rows}x{expected_cols} grid")]
    Dimensions {
        expected_rows: usize,
        expected_cols: usize,
    },
}

/// The editing grid
///
/// `Clone` is a deep copy: history snapshots are independent of the live board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create the default 20x12 empty board
    pub fn new() -> Self {
        Self::empty(BOARD_ROWS, BOARD_COLS)
    }

    /// Create an empty board of the given size
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies on the board
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if position is on the board and empty
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Ok(None))
    }

    /// Number of painted cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether no cell is painted
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Reset every cell to empty, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // `max(1)` keeps chunks() happy for zero-width boards.
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Build a board from nested rows
    ///
    /// Every row must have the same length. An empty outer vector yields a
    /// 0x0 board.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(BoardError::Dimensions {
                expected_rows: height,
                expected_cols: width,
            });
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Like [`Board::from_rows`], also requiring the given dimensions
    pub fn from_rows_sized(
        rows: Vec<Vec<Cell>>,
        expected_rows: usize,
        expected_cols: usize,
    ) -> Result<Self, BoardError> {
        let mismatch = BoardError::Dimensions {
            expected_rows,
            expected_cols,
        };
        if rows.len() != expected_rows || rows.iter().any(|row| row.len() != expected_cols) {
            return Err(mismatch);
        }
        Self::from_rows(rows)
    }

    /// Convert to nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
