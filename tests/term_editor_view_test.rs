use tetris_art::core::{Board, ShapeLibrary};
use tetris_art::engine::EditorSession;
use tetris_art::adapter::DesignSummary;
use tetris_art::term::{DesignPicker, EditorFrame, EditorView, FrameBuffer, Viewport};
use tetris_art::types::{Color, DesignId, Severity};

fn frame<'a>(session: &'a EditorSession<'static>, cursor: (usize, usize)) -> EditorFrame<'a, 'static> {
    EditorFrame {
        session,
        cursor,
        name_input: None,
        toast: None,
        picker: None,
    }
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let session = EditorSession::new(ShapeLibrary::builtin());
    let view = EditorView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 12*2 by 20*1 => 24x20
    // plus border => 26x22
    let fb = view.render(&frame(&session, (10, 5)), Viewport::new(26, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(25, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_painted_cell_as_two_chars_wide() {
    let mut board = Board::new();
    board.set(19, 0, Some(Color::Red)).unwrap();
    let session = EditorSession::with_board(ShapeLibrary::builtin(), board);

    let view = EditorView::default();
    let fb = view.render(&frame(&session, (0, 5)), Viewport::new(26, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_at_cursor() {
    let session = EditorSession::new(ShapeLibrary::builtin());
    let view = EditorView::default();
    let fb = view.render(&frame(&session, (3, 0)), Viewport::new(26, 22));

    // Horizontal I covers columns 0..4 of row 3.
    for x in 1..9 {
        assert_eq!(fb.get(x, 4).unwrap().ch, '▓');
    }
    assert_eq!(fb.get(9, 4).unwrap().ch, '·');
}

#[test]
fn term_view_marks_overflowing_ghost() {
    let session = EditorSession::new(ShapeLibrary::builtin());
    let view = EditorView::default();
    let fb = view.render(&frame(&session, (0, 10)), Viewport::new(26, 22));

    // Only the on-board part is drawn, as a rejection.
    assert_eq!(fb.get(21, 1).unwrap().ch, '×');
    assert_eq!(fb.get(23, 1).unwrap().ch, '×');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = EditorSession::new(ShapeLibrary::builtin());
    session.set_design_name("Skyline");
    session.click(0, 0).unwrap();

    let view = EditorView::default();
    let fb = view.render(
        &EditorFrame {
            session: &session,
            cursor: (5, 5),
            name_input: None,
            toast: Some(("Design saved successfully!", Severity::Success)),
            picker: None,
        },
        Viewport::new(80, 24),
    );

    let all = screen_text(&fb);
    assert!(all.contains("TETRIS ART STUDIO"));
    assert!(all.contains("Skyline"));
    assert!(all.contains("UNDO 1  REDO 0"));
    assert!(all.contains("cyan"));
    assert!(all.contains("Design saved successfully!"));
}

#[test]
fn term_view_shows_name_being_typed() {
    let session = EditorSession::new(ShapeLibrary::builtin());
    let view = EditorView::default();
    let fb = view.render(
        &EditorFrame {
            session: &session,
            cursor: (0, 0),
            name_input: Some("Sky"),
            toast: None,
            picker: None,
        },
        Viewport::new(80, 24),
    );
    assert!(screen_text(&fb).contains("NAME Sky_"));
}

#[test]
fn mouse_position_maps_to_board_cell() {
    let board = Board::new();
    let view = EditorView::default();
    let vp = Viewport::new(26, 22);

    assert_eq!(view.cell_at(&board, vp, 1, 1), Some((0, 0)));
    assert_eq!(view.cell_at(&board, vp, 2, 1), Some((0, 0)));
    assert_eq!(view.cell_at(&board, vp, 3, 1), Some((0, 1)));
    assert_eq!(view.cell_at(&board, vp, 24, 20), Some((19, 11)));
    assert_eq!(view.cell_at(&board, vp, 25, 20), None);
    assert_eq!(view.cell_at(&board, vp, 0, 5), None);
}

fn summary(id: &str, name: &str) -> DesignSummary {
    DesignSummary {
        id: DesignId::new(id),
        name: name.to_string(),
        created_at: 0,
        updated_at: None,
    }
}

#[test]
fn term_view_lists_designs_in_picker() {
    let session = EditorSession::new(ShapeLibrary::builtin());
    let mut picker = DesignPicker::new(vec![summary("a", "Skyline"), summary("b", "Castle")]);
    picker.move_by(1);

    let view = EditorView::default();
    let fb = view.render(
        &EditorFrame {
            picker: Some(&picker),
            ..frame(&session, (0, 0))
        },
        Viewport::new(80, 24),
    );

    let all = screen_text(&fb);
    assert!(all.contains("MY DESIGNS"));
    assert!(all.contains("  Skyline"));
    assert!(all.contains("> Castle"));
    assert!(all.contains("d delete  esc close"));
    // The tool panel is replaced while picking.
    assert!(!all.contains("ROTATE"));
    assert!(!all.contains("press d again"));

    picker.request_delete();
    let fb = view.render(
        &EditorFrame {
            picker: Some(&picker),
            ..frame(&session, (0, 0))
        },
        Viewport::new(80, 24),
    );
    assert!(screen_text(&fb).contains("press d again to delete"));
}

#[test]
fn term_view_shows_empty_picker() {
    let session = EditorSession::new(ShapeLibrary::builtin());
    let picker = DesignPicker::new(Vec::new());
    let fb = EditorView::default().render(
        &EditorFrame {
            picker: Some(&picker),
            ..frame(&session, (0, 0))
        },
        Viewport::new(80, 24),
    );
    assert!(screen_text(&fb).contains("No designs yet."));
}
