//! Placement engine and editing session.
//!
//! [`place`] holds the collision-checked, all-or-nothing stamping of a shape
//! onto a board, plus erase and clear. [`session`] ties a board, its history
//! and the tool settings together and maps user actions onto them.

pub mod place;
pub mod session;

pub use tetris_art_core as core;
pub use tetris_art_types as types;

pub use place::{check_placement, clear, erase, place, PlaceError};
pub use session::{EditorSession, Outcome, SessionError};
