//! EditorView: maps an editing session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::engine::EditorSession;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::picker::DesignPicker;
use crate::types::{Color, Severity};

/// Columns reserved for the side panel
const PANEL_W: u16 = 30;
/// Gap between board frame and panel
const PANEL_GAP: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_BG: Rgb = Rgb::new(17, 24, 39);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Copy)]
pub struct EditorFrame<'a, 'lib> {
    pub session: &'a EditorSession<'lib>,
    /// Board cell under the keyboard cursor
    pub cursor: (usize, usize),
    /// Name being typed, when the name field is focused
    pub name_input: Option<&'a str>,
    /// Latest notification
    pub toast: Option<(&'a str, Severity)>,
    /// Stored designs, when the picker is open
    pub picker: Option<&'a DesignPicker>,
}

/// Where the board frame sits in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left of the frame border
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub panel_x: u16,
}

impl BoardLayout {
    fn inner_x(&self) -> u16 {
        self.frame_x + 1
    }

    fn inner_y(&self) -> u16 {
        self.frame_y + 1
    }
}

/// Terminal renderer for the editor screen.
pub struct EditorView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for EditorView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl EditorView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn layout(&self, board: &Board, viewport: Viewport) -> BoardLayout {
        let frame_w = (board.cols() as u16) * self.cell_w + 2;
        let frame_h = (board.rows() as u16) * self.cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: frame_x + frame_w + PANEL_GAP,
        }
    }

    /// Board cell drawn at terminal position `(x, y)`, if any
    pub fn cell_at(
        &self,
        board: &Board,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        let layout = self.layout(board, viewport);
        let dx = x.checked_sub(layout.inner_x())?;
        let dy = y.checked_sub(layout.inner_y())?;
        let row = (dy / self.cell_h) as usize;
        let col = (dx / self.cell_w) as usize;
        board.contains(row, col).then_some((row, col))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &EditorFrame<'_, '_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).into_cell(' '));

        let board = frame.session.board();
        let layout = self.layout(board, viewport);

        let border = CellStyle::new(Rgb::new(99, 102, 241), PANEL_BG);
        self.draw_border(fb, layout, border);

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                match board.get(row, col).ok().flatten() {
                    Some(color) => self.draw_painted(fb, layout, row, col, color),
                    None => self.draw_empty(fb, layout, row, col),
                }
            }
        }

        self.draw_cursor(fb, layout, frame);
        self.draw_panel(fb, layout, frame, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &EditorFrame<'_, '_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout, style: CellStyle) {
        let BoardLayout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
            ..
        } = layout;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.inner_x() + col as u16 * self.cell_w;
        let py = layout.inner_y() + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: BoardLayout, row: usize, col: usize) {
        let style = CellStyle::new(Rgb::new(60, 60, 70), BOARD_BG).dim();
        self.fill_cell(fb, layout, row, col, '·', style);
    }

    fn draw_painted(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        row: usize,
        col: usize,
        color: Color,
    ) {
        let style = CellStyle::new(Rgb::from_palette(color), BOARD_BG);
        self.fill_cell(fb, layout, row, col, '█', style);
    }

    /// Eraser: highlight the cursor cell. Otherwise: ghost of the active
    /// shape, red when it would be rejected.
    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: BoardLayout, frame: &EditorFrame<'_, '_>) {
        let session = frame.session;
        let board = session.board();
        let (row, col) = frame.cursor;
        if !board.contains(row, col) {
            return;
        }

        if session.eraser() {
            let style = CellStyle::new(Rgb::new(250, 204, 21), BOARD_BG).bold();
            self.fill_cell(fb, layout, row, col, '▒', style);
            return;
        }

        let Some(shape) = session.active_shape() else {
            return;
        };
        let fits = session.can_place(row, col).is_ok();
        let style = if fits {
            CellStyle::new(Rgb::from_palette(session.color()), BOARD_BG)
        } else {
            CellStyle::new(Rgb::new(239, 68, 68), BOARD_BG).bold()
        };
        let ch = if fits { '▓' } else { '×' };
        for (dr, dc) in shape.filled_cells() {
            if board.contains(row + dr, col + dc) {
                self.fill_cell(fb, layout, row + dr, col + dc, ch, style);
            }
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        frame: &EditorFrame<'_, '_>,
        viewport: Viewport,
    ) {
        if layout.panel_x >= viewport.width {
            return;
        }
        let session = frame.session;
        let x = layout.panel_x;
        let label = CellStyle::new(Rgb::new(156, 163, 175), PANEL_BG);
        let value = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mut y = layout.frame_y;

        fb.put_str(x, y, "TETRIS ART STUDIO", value);
        y += 2;

        if let Some(picker) = frame.picker {
            y = self.draw_picker(fb, x, y, picker, viewport);
            self.draw_toast(fb, x, y, frame.toast);
            return;
        }

        let next = fb.put_str(x, y, "NAME ", label);
        match frame.name_input {
            Some(input) => {
                fb.put_str(next, y, &format!("{input}_"), value);
            }
            None if session.design_name().is_empty() => {
                fb.put_str(next, y, "(unnamed)", label.dim());
            }
            None => {
                fb.put_str(next, y, session.design_name(), value);
            }
        }
        y += 1;
        let next = fb.put_str(x, y, "ID   ", label);
        let id = session.design_id().map_or("new", |id| id.as_str());
        fb.put_str(next, y, id, label);
        y += 2;

        let mut cx = fb.put_str(x, y, "PIECE ", label);
        for (i, shape) in session.library().iter().enumerate() {
            let style = if i == session.shape_index() {
                CellStyle::new(Rgb::new(17, 24, 39), Rgb::new(34, 197, 94)).bold()
            } else {
                label
            };
            cx = fb.put_str(cx, y, shape.name(), style);
            cx = fb.put_str(cx, y, " ", label);
        }
        y += 1;
        let degrees = u16::from(session.rotation().turns()) * 90;
        let next = fb.put_str(x, y, "ROTATE ", label);
        fb.put_str(next, y, &format!("{degrees}°"), value);
        y += 1;

        if let Some(shape) = session.active_shape() {
            let swatch = CellStyle::new(Rgb::from_palette(session.color()), PANEL_BG);
            for r in 0..shape.rows() {
                for c in 0..shape.cols() {
                    let ch = if shape.is_filled(r, c) { '█' } else { ' ' };
                    let px = x + 2 + (c as u16) * 2;
                    fb.put_char(px, y, ch, swatch);
                    fb.put_char(px + 1, y, ch, swatch);
                }
                y += 1;
            }
        }
        y += 1;

        let mut cx = fb.put_str(x, y, "COLOR ", label);
        for color in Color::ALL {
            let swatch = CellStyle::new(Rgb::from_palette(color), PANEL_BG);
            let ch = if color == session.color() { '■' } else { '□' };
            fb.put_char(cx, y, ch, swatch);
            cx = fb.put_str(cx + 1, y, " ", label);
        }
        y += 1;
        let next = fb.put_str(x, y, "      ", label);
        fb.put_str(next, y, session.color().as_str(), value);
        y += 1;

        let next = fb.put_str(x, y, "ERASER ", label);
        fb.put_str(next, y, if session.eraser() { "ON" } else { "OFF" }, value);
        y += 1;

        let history = session.history();
        fb.put_str(
            x,
            y,
            &format!("UNDO {}  REDO {}", history.undo_len(), history.redo_len()),
            label,
        );
        y += 2;

        let help = label.dim();
        for line in [
            "arrows move   space place",
            "r rotate  e eraser  tab color",
            "1-7 piece  c clear",
            "^Z undo  ^Y redo",
            "n name  s save  q quit",
            "o my designs",
        ] {
            fb.put_str(x, y, line, help);
            y += 1;
        }

        self.draw_toast(fb, x, y, frame.toast);
    }

    fn draw_toast(&self, fb: &mut FrameBuffer, x: u16, y: u16, toast: Option<(&str, Severity)>) {
        let Some((message, severity)) = toast else {
            return;
        };
        let bg = match severity {
            Severity::Success => Rgb::new(22, 163, 74),
            Severity::Error => Rgb::new(220, 38, 38),
        };
        fb.put_str(x, y + 1, message, CellStyle::new(Rgb::new(255, 255, 255), bg).bold());
    }

    /// Design list in place of the tool panel; returns the next free row
    fn draw_picker(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        mut y: u16,
        picker: &DesignPicker,
        viewport: Viewport,
    ) -> u16 {
        let label = CellStyle::new(Rgb::new(156, 163, 175), PANEL_BG);
        let value = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let selected = CellStyle::new(Rgb::new(17, 24, 39), Rgb::new(34, 197, 94)).bold();

        fb.put_str(x, y, "MY DESIGNS", value);
        y += 1;

        let designs = picker.designs();
        if designs.is_empty() {
            fb.put_str(x, y, "No designs yet.", label.dim());
            y += 1;
        } else {
            // Rows left after the footer (blank, two help lines, confirm, toast).
            let visible = usize::from(viewport.height.saturating_sub(y + 6)).max(1);
            let start = (picker.selected() + 1).saturating_sub(visible);
            for (i, design) in designs.iter().enumerate().skip(start).take(visible) {
                let name: String = design.name.chars().take(usize::from(PANEL_W) - 2).collect();
                if i == picker.selected() {
                    let next = fb.put_str(x, y, "> ", value);
                    fb.put_str(next, y, &name, selected);
                } else {
                    fb.put_str(x + 2, y, &name, label);
                }
                y += 1;
            }
        }
        y += 1;

        let help = label.dim();
        fb.put_str(x, y, "enter open  n new", help);
        y += 1;
        fb.put_str(x, y, "d delete  esc close", help);
        y += 1;
        if picker.confirming_delete() {
            let warn = CellStyle::new(Rgb::new(239, 68, 68), PANEL_BG).bold();
            fb.put_str(x, y, "press d again to delete", warn);
            y += 1;
        }
        y
    }
}
