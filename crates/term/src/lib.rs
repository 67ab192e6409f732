//! Terminal "editor renderer" module.
//!
//! A small rendering layer for the editor screen. It avoids widget/layout
//! libraries and renders into a simple framebuffer that is flushed to a
//! terminal backend.
//!
//! - Keep `core` and `engine` free of terminal concerns
//! - Allow precise control over aspect ratio (2 chars wide per board cell)
//! - Map mouse positions back onto board cells

pub mod editor_view;
pub mod fb;
pub mod picker;
pub mod renderer;

pub use tetris_art_adapter as adapter;
pub use tetris_art_core as core;
pub use tetris_art_engine as engine;
pub use tetris_art_types as types;

pub use editor_view::{BoardLayout, EditorFrame, EditorView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use picker::DesignPicker;
pub use renderer::TerminalRenderer;
