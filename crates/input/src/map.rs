//! Key and mouse mapping from terminal events to editor commands.

use crate::types::EditorAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What the front end should do in response to an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the editing session
    Editor(EditorAction),
    /// Move the board cursor by `(rows, cols)`
    MoveCursor { rows: i8, cols: i8 },
    /// Click the cell under the board cursor
    ClickCursor,
    /// Click whatever is drawn at terminal position `(x, y)`
    ClickAt { x: u16, y: u16 },
    /// Switch to the next palette color
    NextColor,
    Save,
    /// Start editing the design name
    EditName,
    /// Show the signed-in user's stored designs
    OpenPicker,
}

/// Keystrokes while the design picker is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    /// Move the selection by this many entries
    Move(i8),
    Open,
    /// Delete the selected design (asks again before deleting)
    Delete,
    /// Start a fresh, unsaved design
    New,
    Close,
}

/// Keystrokes while the design name is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEdit {
    Insert(char),
    Backspace,
    Commit,
    Cancel,
}

/// Map keyboard input to editor commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('z') | KeyCode::Char('Z') => Some(Command::Editor(EditorAction::Undo)),
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::Editor(EditorAction::Redo)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Save),
            _ => None,
        };
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveCursor { rows: 0, cols: -1 }),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveCursor { rows: 0, cols: 1 }),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveCursor { rows: -1, cols: 0 }),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveCursor { rows: 1, cols: 0 }),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::ClickCursor),

        // Tools
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Editor(EditorAction::Rotate)),
        KeyCode::Char('e') | KeyCode::Char('E') => {
            Some(Command::Editor(EditorAction::ToggleEraser))
        }
        KeyCode::Tab => Some(Command::NextColor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Some(Command::Editor(EditorAction::SelectShape(index)))
        }

        // Board
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Editor(EditorAction::Clear)),
        KeyCode::Char('u') => Some(Command::Editor(EditorAction::Undo)),
        KeyCode::Char('U') => Some(Command::Editor(EditorAction::Redo)),

        // Design
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Save),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::EditName),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Command::OpenPicker),

        _ => None,
    }
}

/// Map a mouse event; only left-button presses click.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::ClickAt {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}

/// Map keys pressed while the design picker is shown.
pub fn handle_picker_key(key: KeyEvent) -> Option<PickerKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickerKey::Move(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(PickerKey::Move(1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(PickerKey::Open),
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => Some(PickerKey::Delete),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(PickerKey::New),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('o') | KeyCode::Char('O') => {
            Some(PickerKey::Close)
        }
        _ => None,
    }
}

/// Map keys typed into the design name field.
pub fn handle_name_key(key: KeyEvent) -> Option<NameEdit> {
    match key.code {
        KeyCode::Enter => Some(NameEdit::Commit),
        KeyCode::Esc => Some(NameEdit::Cancel),
        KeyCode::Backspace => Some(NameEdit::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NameEdit::Insert(c))
        }
        _ => None,
    }
}

/// Check if key should quit the editor.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
