//! Editing session - owns the live board and routes user actions
//!
//! A session is what the editor screen works on: the board, its history, and
//! the current tool settings (shape, rotation, color, eraser). Board-changing
//! actions record a snapshot first, so every change can be undone.

use thiserror::Error;
use tracing::debug;

use crate::core::{Board, BoardError, History, Shape, ShapeError, ShapeLibrary, ShapeMatrix};
use crate::place::{self, PlaceError};
use crate::types::{Color, DesignId, EditorAction, Rotation, DEFAULT_SHAPE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("no shape at position {0}")]
    NoShapeAt(usize),
    #[error(transparent)]
    Placement(#[from] PlaceError),
}

/// What an applied action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The active shape was stamped; carries the number of cells painted
    Placed(usize),
    /// Placement was refused; nothing changed
    Rejected(PlaceError),
    /// A painted cell was erased
    Erased,
    /// The clicked cell was already empty; still recorded in history
    NothingToErase,
    Cleared,
    Undone,
    Redone,
    NothingToUndo,
    NothingToRedo,
    Rotated(Rotation),
    EraserToggled(bool),
    ShapeSelected(usize),
    ColorSelected(Color),
}

impl Outcome {
    /// Whether the board may now differ from before the action
    pub fn changed_board(&self) -> bool {
        matches!(
            self,
            Outcome::Placed(_) | Outcome::Erased | Outcome::Cleared | Outcome::Undone | Outcome::Redone
        )
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession<'lib> {
    board: Board,
    history: History,
    library: &'lib ShapeLibrary,
    shape_index: usize,
    rotation: Rotation,
    color: Color,
    eraser: bool,
    design_id: Option<DesignId>,
    design_name: String,
    /// Bumped on every board change; front ends mirror the board when it moves
    revision: u64,
}

impl<'lib> EditorSession<'lib> {
    /// New session on an empty default-size board
    pub fn new(library: &'lib ShapeLibrary) -> Self {
        Self::with_board(library, Board::new())
    }

    /// New session editing `board`
    pub fn with_board(library: &'lib ShapeLibrary, board: Board) -> Self {
        Self {
            board,
            history: History::new(),
            library,
            shape_index: library.position(DEFAULT_SHAPE).unwrap_or(0),
            rotation: Rotation::default(),
            color: Color::default(),
            eraser: false,
            design_id: None,
            design_name: String::new(),
            revision: 0,
        }
    }

    /// New session editing a stored design
    pub fn with_design(
        library: &'lib ShapeLibrary,
        board: Board,
        id: DesignId,
        name: impl Into<String>,
    ) -> Self {
        let mut session = Self::with_board(library, board);
        session.design_id = Some(id);
        session.design_name = name.into();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn library(&self) -> &'lib ShapeLibrary {
        self.library
    }

    /// Currently selected base shape
    pub fn shape(&self) -> Option<&'lib Shape> {
        self.library.get(self.shape_index)
    }

    pub fn shape_index(&self) -> usize {
        self.shape_index
    }

    /// Rotated-and-trimmed form of the selected shape
    pub fn active_shape(&self) -> Option<&'lib ShapeMatrix> {
        let rotation = self.rotation;
        self.shape().map(|shape| shape.active(rotation))
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn eraser(&self) -> bool {
        self.eraser
    }

    pub fn design_id(&self) -> Option<&DesignId> {
        self.design_id.as_ref()
    }

    pub fn set_design_id(&mut self, id: DesignId) {
        self.design_id = Some(id);
    }

    /// Forget the stored design, e.g. after it was deleted; the next save
    /// creates a new one
    pub fn clear_design_id(&mut self) {
        self.design_id = None;
    }

    pub fn design_name(&self) -> &str {
        &self.design_name
    }

    pub fn set_design_name(&mut self, name: impl Into<String>) {
        self.design_name = name.into();
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one user action
    ///
    /// Errors only for caller bugs: a click outside the board, or selecting a
    /// shape position the library does not have. Rejected placements are an
    /// [`Outcome`], not an error.
    pub fn apply(&mut self, action: EditorAction) -> Result<Outcome, SessionError> {
        let outcome = match action {
            EditorAction::Click { row, col } => self.click(row, col)?,
            EditorAction::Rotate => self.rotate(),
            EditorAction::ToggleEraser => self.toggle_eraser(),
            EditorAction::Clear => self.clear(),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::SelectShape(index) => self.select_shape(index)?,
            EditorAction::SelectColor(color) => self.select_color(color),
        };
        debug!(action = action.as_str(), ?outcome, "applied editor action");
        Ok(outcome)
    }

    /// Click a cell: erase it in eraser mode, otherwise stamp the active shape
    /// with its top-left corner there
    pub fn click(&mut self, row: usize, col: usize) -> Result<Outcome, SessionError> {
        if !self.board.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.board.rows(),
                cols: self.board.cols(),
            }
            .into());
        }

        if self.eraser {
            // An erase is an edit even on an empty cell: it is recorded and
            // invalidates redo.
            self.history.record_mutation(&self.board);
            let was_painted = place::erase(&mut self.board, row, col)?;
            self.bump();
            return Ok(if was_painted {
                Outcome::Erased
            } else {
                Outcome::NothingToErase
            });
        }

        let Some(shape) = self.active_shape() else {
            return Err(SessionError::NoShapeAt(self.shape_index));
        };
        let before = self.board.clone();
        match place::place(&mut self.board, shape, row, col, self.color) {
            Ok(painted) => {
                self.history.record_snapshot(before);
                self.bump();
                Ok(Outcome::Placed(painted))
            }
            Err(reason) => {
                debug!(row, col, code = reason.code(), "placement rejected");
                Ok(Outcome::Rejected(reason))
            }
        }
    }

    /// Whether the active shape would fit at `(row, col)` right now
    ///
    /// Fails with [`SessionError::NoShapeAt`] when the library has no shape at
    /// the selected position (an empty custom library).
    pub fn can_place(&self, row: usize, col: usize) -> Result<(), SessionError> {
        let shape = self
            .active_shape()
            .ok_or(SessionError::NoShapeAt(self.shape_index))?;
        place::check_placement(&self.board, shape, row, col)?;
        Ok(())
    }

    pub fn rotate(&mut self) -> Outcome {
        self.rotation = self.rotation.rotate_cw();
        Outcome::Rotated(self.rotation)
    }

    pub fn toggle_eraser(&mut self) -> Outcome {
        self.eraser = !self.eraser;
        Outcome::EraserToggled(self.eraser)
    }

    /// Reset the board to empty, keeping its size
    pub fn clear(&mut self) -> Outcome {
        self.history.record_mutation(&self.board);
        self.board = place::clear(self.board.rows(), self.board.cols());
        self.bump();
        Outcome::Cleared
    }

    pub fn undo(&mut self) -> Outcome {
        match self.history.undo(&self.board) {
            Some(previous) => {
                self.board = previous;
                self.bump();
                Outcome::Undone
            }
            None => Outcome::NothingToUndo,
        }
    }

    pub fn redo(&mut self) -> Outcome {
        match self.history.redo(&self.board) {
            Some(next) => {
                self.board = next;
                self.bump();
                Outcome::Redone
            }
            None => Outcome::NothingToRedo,
        }
    }

    /// Select a shape by library position; rotation is kept
    pub fn select_shape(&mut self, index: usize) -> Result<Outcome, SessionError> {
        if self.library.get(index).is_none() {
            return Err(SessionError::NoShapeAt(index));
        }
        self.shape_index = index;
        Ok(Outcome::ShapeSelected(index))
    }

    /// Select a shape by name
    pub fn select_shape_named(&mut self, name: &str) -> Result<Outcome, SessionError> {
        self.library.lookup(name)?;
        let index = self.library.position(name).unwrap_or(self.shape_index);
        self.select_shape(index)
    }

    pub fn select_color(&mut self, color: Color) -> Outcome {
        self.color = color;
        Outcome::ColorSelected(color)
    }

    /// Swap in a different board, dropping all history
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.history.reset();
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
