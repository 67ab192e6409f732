//! Terminal input module (editor-facing).
//!
//! Maps `crossterm` key and mouse events into editor commands. Keeping this
//! separate from the session lets the editing core stay free of any terminal
//! dependency.

pub mod map;

pub use tetris_art_types as types;

pub use map::{
    handle_key_event, handle_mouse_event, handle_name_key, handle_picker_key, should_quit,
    Command, NameEdit, PickerKey,
};
