//! Tetris Art (workspace facade crate).
//!
//! Re-exports the editor's member crates under one roof as
//! `tetris_art::{core,engine,adapter,input,term,types}`; the implementation
//! lives in dedicated crates under `crates/`.

pub use tetris_art_adapter as adapter;
pub use tetris_art_core as core;
pub use tetris_art_engine as engine;
pub use tetris_art_input as input;
pub use tetris_art_term as term;
pub use tetris_art_types as types;
