//! Shape transform - rotation and trimming of 0/1 shape matrices
//!
//! A [`ShapeMatrix`] is a rectangular grid of filled/empty cells. Rotation is a
//! plain 90° clockwise matrix turn, so four turns always reproduce the input.
//! Trimming strips empty border rows and columns, giving the minimal bounding
//! matrix used for preview and placement.

use thiserror::Error;

use crate::types::Rotation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("shape `{0}` is not rectangular")]
    Ragged(String),
    #[error("shape `{0}` has no filled cell")]
    Blank(String),
    #[error("shape `{0}` is registered twice")]
    Duplicate(String),
}

/// Rectangular 0/1 matrix, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl ShapeMatrix {
    /// Build from rows of 0/1 values; any non-zero value counts as filled
    ///
    /// Returns `None` for ragged input.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().map(|&v| v != 0))
            .collect();
        Some(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` is filled; false outside the matrix
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Offsets `(row, col)` of every filled cell, row-major
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &filled)| filled)
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    fn row_has_fill(&self, row: usize) -> bool {
        (0..self.cols).any(|col| self.is_filled(row, col))
    }

    fn col_has_fill(&self, col: usize) -> bool {
        (0..self.rows).any(|row| self.is_filled(row, col))
    }

    /// Rotate 90° clockwise
    ///
    /// An `R x C` input becomes `C x R` with `out[c][R - 1 - r] = in[r][c]`.
    pub fn rotate(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut cells = vec![false; rows * cols];
        for r in 0..rows {
            for c in 0..cols {
                // Output has `rows` columns.
                cells[c * rows + (rows - 1 - r)] = self.cells[r * cols + c];
            }
        }
        Self {
            rows: cols,
            cols: rows,
            cells,
        }
    }

    /// Drop leading/trailing empty rows and columns
    ///
    /// Callers must pass a matrix with at least one filled cell; an all-empty
    /// matrix trims down to 0x0.
    pub fn trim(&self) -> Self {
        let keep_rows: Vec<usize> = (0..self.rows).filter(|&r| self.row_has_fill(r)).collect();
        let keep_cols: Vec<usize> = (0..self.cols).filter(|&c| self.col_has_fill(c)).collect();
        let (Some(&top), Some(&bottom), Some(&left), Some(&right)) = (
            keep_rows.first(),
            keep_rows.last(),
            keep_cols.first(),
            keep_cols.last(),
        ) else {
            return Self {
                rows: 0,
                cols: 0,
                cells: Vec::new(),
            };
        };

        // Interior empty lines stay so relative positions are preserved.
        let rows = bottom - top + 1;
        let cols = right - left + 1;
        let mut cells = Vec::with_capacity(rows * cols);
        for r in top..=bottom {
            for c in left..=right {
                cells.push(self.cells[r * self.cols + c]);
            }
        }
        Self { rows, cols, cells }
    }

    /// Apply `rotation` clockwise turns, then trim
    pub fn active(&self, rotation: Rotation) -> Self {
        let mut shape = self.clone();
        for _ in 0..rotation.turns() {
            shape = shape.rotate();
        }
        shape.trim()
    }

    /// Rows as 0/1 values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| self.is_filled(r, c) as u8).collect())
            .collect()
    }
}
