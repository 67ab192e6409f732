//! Editing session tests - user actions routed through placement and history

use tetris_art::core::ShapeLibrary;
use tetris_art::engine::{EditorSession, Outcome, PlaceError, SessionError};
use tetris_art::types::{Color, EditorAction, Rotation};

fn session() -> EditorSession<'static> {
    EditorSession::new(ShapeLibrary::builtin())
}

#[test]
fn test_defaults() {
    let session = session();
    assert_eq!(session.shape().map(|s| s.name()), Some("I"));
    assert_eq!(session.rotation(), Rotation::default());
    assert_eq!(session.color(), Color::Cyan);
    assert!(!session.eraser());
    assert!(session.design_id().is_none());
    assert!(session.board().is_blank());
}

#[test]
fn test_click_places_and_records_history() {
    let mut session = session();
    let outcome = session.apply(EditorAction::Click { row: 0, col: 0 }).unwrap();
    assert_eq!(outcome, Outcome::Placed(4));
    assert_eq!(session.board().filled_count(), 4);
    assert_eq!(session.history().undo_len(), 1);
    assert_eq!(session.revision(), 1);
}

#[test]
fn test_rejected_click_changes_nothing() {
    let mut session = session();
    session.click(0, 0).unwrap();
    let board = session.board().clone();
    let revision = session.revision();

    let outcome = session.click(0, 0).unwrap();
    assert_eq!(outcome, Outcome::Rejected(PlaceError::Collision { row: 0, col: 0 }));
    assert!(!outcome.changed_board());
    assert_eq!(session.board(), &board);
    assert_eq!(session.history().undo_len(), 1);
    assert_eq!(session.revision(), revision);
}

#[test]
fn test_click_outside_board_is_an_error() {
    let mut session = session();
    assert!(matches!(
        session.click(20, 0),
        Err(SessionError::Board(_))
    ));
    assert_eq!(session.history().undo_len(), 0);
}

#[test]
fn test_rotation_changes_footprint() {
    let mut session = session();
    session.apply(EditorAction::Rotate).unwrap();
    assert_eq!(session.rotation(), Rotation::new(1));

    // Vertical I fills one column, four rows.
    session.click(0, 11).unwrap();
    for row in 0..4 {
        assert_eq!(session.board().get(row, 11), Ok(Some(Color::Cyan)));
    }
}

#[test]
fn test_rotation_wraps_and_survives_shape_change() {
    let mut session = session();
    for _ in 0..5 {
        session.rotate();
    }
    assert_eq!(session.rotation(), Rotation::new(1));

    session.select_shape_named("T").unwrap();
    assert_eq!(session.rotation(), Rotation::new(1));
    assert_eq!(session.shape().map(|s| s.name()), Some("T"));
}

#[test]
fn test_select_shape_out_of_range() {
    let mut session = session();
    assert!(matches!(
        session.apply(EditorAction::SelectShape(7)),
        Err(SessionError::NoShapeAt(7))
    ));
    assert!(session.select_shape_named("W").is_err());
    assert_eq!(session.shape_index(), 0);
}

#[test]
fn test_eraser_mode() {
    let mut session = session();
    session.click(2, 2).unwrap();
    session.apply(EditorAction::ToggleEraser).unwrap();

    assert_eq!(session.click(2, 3).unwrap(), Outcome::Erased);
    assert_eq!(session.board().get(2, 3), Ok(None));
    assert_eq!(session.history().undo_len(), 2);

    // Already empty: the board stays put but the erase is still recorded.
    let board = session.board().clone();
    assert_eq!(session.click(2, 3).unwrap(), Outcome::NothingToErase);
    assert_eq!(session.board(), &board);
    assert_eq!(session.history().undo_len(), 3);
}

#[test]
fn test_erase_on_empty_cell_invalidates_redo() {
    let mut session = session();
    session.click(0, 0).unwrap();
    session.undo();
    assert_eq!(session.history().redo_len(), 1);

    session.toggle_eraser();
    assert_eq!(session.click(5, 5).unwrap(), Outcome::NothingToErase);
    assert_eq!(session.history().undo_len(), 1);
    assert_eq!(session.history().redo_len(), 0);
    assert_eq!(session.redo(), Outcome::NothingToRedo);
}

#[test]
fn test_selected_color_is_painted() {
    let mut session = session();
    session.apply(EditorAction::SelectColor(Color::Purple)).unwrap();
    session.click(5, 5).unwrap();
    assert_eq!(session.board().get(5, 5), Ok(Some(Color::Purple)));
}

#[test]
fn test_clear_undo_redo() {
    let mut session = session();
    session.click(0, 0).unwrap();
    session.click(1, 0).unwrap();
    let painted = session.board().clone();

    assert_eq!(session.apply(EditorAction::Clear).unwrap(), Outcome::Cleared);
    assert!(session.board().is_blank());

    assert_eq!(session.apply(EditorAction::Undo).unwrap(), Outcome::Undone);
    assert_eq!(session.board(), &painted);

    assert_eq!(session.apply(EditorAction::Redo).unwrap(), Outcome::Redone);
    assert!(session.board().is_blank());
    assert_eq!(session.redo(), Outcome::NothingToRedo);
}

#[test]
fn test_undo_on_fresh_session() {
    let mut session = session();
    assert_eq!(session.undo(), Outcome::NothingToUndo);
    assert_eq!(session.revision(), 0);
}

#[test]
fn test_new_edit_after_undo_drops_redo() {
    let mut session = session();
    session.click(0, 0).unwrap();
    session.undo();
    assert!(session.history().can_redo());

    session.click(4, 4).unwrap();
    assert!(!session.history().can_redo());
}
