//! Core editing model - pure, deterministic, and testable
//!
//! This crate holds the in-memory state of the pixel-art editor. It has no
//! dependencies on terminals, storage or networking.
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of empty/colored cells with bounds-checked access
//! - [`shape`]: 0/1 shape matrices with 90° rotation and border trimming
//! - [`library`]: registry of named base shapes (the seven tetrominoes by default)
//! - [`history`]: bounded undo/redo stacks of board snapshots
//!
//! # Example
//!
//! ```
//! use tetris_art_core::{Board, History, ShapeLibrary};
//! use tetris_art_core::types::{Color, Rotation};
//!
//! let mut board = Board::new();
//! let mut history = History::new();
//!
//! let bar = ShapeLibrary::builtin().lookup("I").unwrap().active(Rotation::default());
//! assert_eq!((bar.rows(), bar.cols()), (1, 4));
//!
//! history.record_mutation(&board);
//! board.set(0, 0, Some(Color::Cyan)).unwrap();
//!
//! let previous = history.undo(&board).unwrap();
//! assert!(previous.is_blank());
//! ```

pub mod board;
pub mod history;
pub mod library;
pub mod shape;

pub use tetris_art_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use history::History;
pub use library::{Shape, ShapeLibrary};
pub use shape::{ShapeError, ShapeMatrix};
