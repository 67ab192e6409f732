//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the editor.
//! Everything here is plain data: usable from the board model, the placement
//! engine, the persistence bridge and the terminal front end alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 12 (indexed 0-11, left to right)
//!
//! Coordinates are always `(row, col)` with the origin at the top-left cell.
//!
//! # Examples
//!
//! ```
//! use tetris_art_types::{Color, EditorAction, Rotation, BOARD_COLS, BOARD_ROWS};
//!
//! // Parse a palette color (case-insensitive)
//! assert_eq!(Color::from_str("Cyan"), Some(Color::Cyan));
//!
//! // Rotation wraps after four quarter turns
//! let rotation = Rotation::default().rotate_cw().rotate_cw().rotate_cw().rotate_cw();
//! assert_eq!(rotation, Rotation::default());
//!
//! // Parse an editor action
//! assert_eq!(EditorAction::from_str("undo"), Some(EditorAction::Undo));
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 12);
//! ```

use serde::{Deserialize, Serialize};

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Board width in cells (12 columns)
pub const BOARD_COLS: usize = 12;

/// Maximum number of snapshots kept on each history stack
pub const HISTORY_LIMIT: usize = 20;

/// Key of the local slot the current board is mirrored to
pub const LOCAL_SLOT_KEY: &str = "tetris-art-grid";

/// Shape selected when a session starts
pub const DEFAULT_SHAPE: &str = "I";

/// Palette of colors a cell can be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Cyan,
    Red,
    Yellow,
    Green,
    Purple,
    Orange,
}

impl Color {
    /// Palette order as presented to the user
    pub const ALL: [Color; 6] = [
        Color::Cyan,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Orange,
    ];

    /// Parse a color name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_art_types::Color;
    ///
    /// assert_eq!(Color::from_str("red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("ORANGE"), Some(Color::Orange));
    /// assert_eq!(Color::from_str("magenta"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(Color::Cyan),
            "red" => Some(Color::Red),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "purple" => Some(Color::Purple),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Lowercase name, the same text used in stored boards
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }

    /// The next palette entry, wrapping around
    pub fn next(&self) -> Self {
        let idx = Color::ALL.iter().position(|c| c == self).unwrap_or(0);
        Color::ALL[(idx + 1) % Color::ALL.len()]
    }
}

/// A cell on the board
///
/// - `None`: empty cell
/// - `Some(Color)`: cell painted with the given color
pub type Cell = Option<Color>;

/// Quarter turns applied to a base shape, always in `0..4`
///
/// Four clockwise turns bring a shape back to where it started, so the value
/// is kept reduced modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    /// Number of distinct rotation states
    pub const COUNT: usize = 4;

    /// Build a rotation from any number of quarter turns
    ///
    /// ```
    /// use tetris_art_types::Rotation;
    ///
    /// assert_eq!(Rotation::new(5), Rotation::new(1));
    /// assert_eq!(Rotation::new(4).turns(), 0);
    /// ```
    pub fn new(turns: u32) -> Self {
        Self((turns % Self::COUNT as u32) as u8)
    }

    /// Quarter turns in `0..4`
    pub fn turns(&self) -> u8 {
        self.0
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        Self((self.0 + 1) % Self::COUNT as u8)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        Self((self.0 + Self::COUNT as u8 - 1) % Self::COUNT as u8)
    }

    /// Index usable for per-rotation tables
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a stored design, assigned by the document store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(String);

impl DesignId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DesignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identity of the user owning designs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(String);

impl PrincipalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Severity attached to a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// User actions that drive an editing session
///
/// These come from key presses or mouse clicks in the front end. Actions that
/// mutate the board (`Click`, `Clear`) go through the history manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Click a board cell: place the active shape there, or erase in eraser mode
    Click { row: usize, col: usize },
    /// Rotate the active shape 90° clockwise
    Rotate,
    /// Toggle eraser mode
    ToggleEraser,
    /// Reset every cell to empty
    Clear,
    /// Restore the previous board
    Undo,
    /// Re-apply the last undone board
    Redo,
    /// Select the shape at this position of the library
    SelectShape(usize),
    /// Select the paint color
    SelectColor(Color),
}

impl EditorAction {
    /// Parse a parameterless action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_art_types::EditorAction;
    ///
    /// assert_eq!(EditorAction::from_str("rotate"), Some(EditorAction::Rotate));
    /// assert_eq!(EditorAction::from_str("toggleEraser"), Some(EditorAction::ToggleEraser));
    /// assert_eq!(EditorAction::from_str("click"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(EditorAction::Rotate),
            "toggleeraser" => Some(EditorAction::ToggleEraser),
            "clear" => Some(EditorAction::Clear),
            "undo" => Some(EditorAction::Undo),
            "redo" => Some(EditorAction::Redo),
            _ => None,
        }
    }

    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorAction::Click { .. } => "click",
            EditorAction::Rotate => "rotate",
            EditorAction::ToggleEraser => "toggleEraser",
            EditorAction::Clear => "clear",
            EditorAction::Undo => "undo",
            EditorAction::Redo => "redo",
            EditorAction::SelectShape(_) => "selectShape",
            EditorAction::SelectColor(_) => "selectColor",
        }
    }

    /// Whether this action can change the board
    pub fn mutates_board(&self) -> bool {
        matches!(
            self,
            EditorAction::Click { .. }
                | EditorAction::Clear
                | EditorAction::Undo
                | EditorAction::Redo
        )
    }
}
