//! Terminal pixel-art editor (default binary).
//!
//! Stamps tetromino shapes onto a 20x12 board. It uses crossterm for input
//! (keys and mouse clicks) and a custom framebuffer-based renderer. Designs
//! are stored as JSON files under the data directory, and the live board is
//! mirrored to a local cache after every change.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use tetris_art::adapter::slot::{mirror, restore};
use tetris_art::adapter::{
    AppConfig, DesignService, FileSlot, FileStore, StaticIdentity, ToastNotifier,
};
use tetris_art::core::ShapeLibrary;
use tetris_art::engine::EditorSession;
use tetris_art::input::{
    handle_key_event, handle_mouse_event, handle_name_key, handle_picker_key, should_quit,
    Command, NameEdit, PickerKey,
};
use tetris_art::term::{
    DesignPicker, EditorFrame, EditorView, FrameBuffer, TerminalRenderer, Viewport,
};
use tetris_art::types::{EditorAction, Severity};

/// How long a notification stays on screen
const TOAST_TTL: Duration = Duration::from_secs(3);
/// Event poll timeout; bounds how late an expired toast disappears
const POLL: Duration = Duration::from_millis(250);

type Service = DesignService<FileStore, StaticIdentity, ToastNotifier>;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let library = ShapeLibrary::builtin();
    let slot = FileSlot::new(&config.data_dir);
    let service = DesignService::new(
        FileStore::new(config.designs_dir()),
        config.identity(),
        ToastNotifier::new(),
    );

    let session = match &config.design {
        Some(id) => runtime
            .block_on(service.open(library, id))
            .unwrap_or_else(|_| restore(&slot, library)),
        None => restore(&slot, library),
    };
    info!(data_dir = %config.data_dir.display(), user = ?config.user, "editor started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut app = App::new(session);
    let result = app.run(&mut term, &runtime, &service, &slot);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file only; the terminal is in raw mode while editing.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| anyhow!(e))
}

struct App<'lib> {
    session: EditorSession<'lib>,
    cursor: (usize, usize),
    name_input: Option<String>,
    picker: Option<DesignPicker>,
    toast: Option<(String, Severity, Instant)>,
    /// Revision last written to the local slot; `None` forces a write
    mirrored_revision: Option<u64>,
}

impl<'lib> App<'lib> {
    fn new(session: EditorSession<'lib>) -> Self {
        let mirrored_revision = Some(session.revision());
        Self {
            session,
            cursor: (0, 0),
            name_input: None,
            picker: None,
            toast: None,
            mirrored_revision,
        }
    }

    fn run(
        &mut self,
        term: &mut TerminalRenderer,
        runtime: &Runtime,
        service: &Service,
        slot: &FileSlot,
    ) -> Result<()> {
        let view = EditorView::default();
        let mut fb = FrameBuffer::new(0, 0);

        loop {
            self.collect_toast(service);
            self.mirror_if_changed(slot);

            // Render.
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let viewport = Viewport::new(w, h);
            let frame = EditorFrame {
                session: &self.session,
                cursor: self.cursor,
                name_input: self.name_input.as_deref(),
                toast: self
                    .toast
                    .as_ref()
                    .map(|(message, severity, _)| (message.as_str(), *severity)),
                picker: self.picker.as_ref(),
            };
            view.render_into(&frame, viewport, &mut fb);
            term.draw(&fb)?;

            if !event::poll(POLL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.picker.is_some() {
                        if let Some(pick) = handle_picker_key(key) {
                            self.pick(pick, runtime, service);
                        }
                        continue;
                    }
                    if self.name_input.is_some() {
                        if let Some(edit) = handle_name_key(key) {
                            self.edit_name(edit);
                        }
                        continue;
                    }
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        self.execute(command, &view, viewport, runtime, service);
                    }
                }
                Event::Mouse(mouse) if self.name_input.is_none() && self.picker.is_none() => {
                    if let Some(command) = handle_mouse_event(mouse) {
                        self.execute(command, &view, viewport, runtime, service);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }

    fn execute(
        &mut self,
        command: Command,
        view: &EditorView,
        viewport: Viewport,
        runtime: &Runtime,
        service: &Service,
    ) {
        match command {
            Command::Editor(action) => self.apply(action),
            Command::MoveCursor { rows, cols } => self.move_cursor(rows, cols),
            Command::ClickCursor => {
                let (row, col) = self.cursor;
                self.apply(EditorAction::Click { row, col });
            }
            Command::ClickAt { x, y } => {
                if let Some((row, col)) = view.cell_at(self.session.board(), viewport, x, y) {
                    self.cursor = (row, col);
                    self.apply(EditorAction::Click { row, col });
                }
            }
            Command::NextColor => {
                let next = self.session.color().next();
                self.apply(EditorAction::SelectColor(next));
            }
            Command::Save => {
                // Failures are already reported through the notifier.
                let _ = runtime.block_on(service.save(&mut self.session));
            }
            Command::EditName => {
                self.name_input = Some(self.session.design_name().to_string());
            }
            Command::OpenPicker => {
                // Failures are already reported through the notifier.
                if let Ok(designs) = runtime.block_on(service.list()) {
                    self.picker = Some(DesignPicker::new(designs));
                }
            }
        }
    }

    fn pick(&mut self, key: PickerKey, runtime: &Runtime, service: &Service) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match key {
            PickerKey::Move(delta) => picker.move_by(delta),
            PickerKey::Open => {
                let Some(id) = picker.selected_design().map(|d| d.id.clone()) else {
                    return;
                };
                if let Ok(session) = runtime.block_on(service.open(self.session.library(), &id)) {
                    info!(%id, "design opened");
                    self.load(session);
                }
            }
            PickerKey::Delete => {
                let Some(id) = picker.request_delete() else {
                    return;
                };
                if runtime.block_on(service.delete(&id)).is_ok() {
                    picker.remove(&id);
                    if self.session.design_id() == Some(&id) {
                        self.session.clear_design_id();
                    }
                }
            }
            PickerKey::New => {
                let fresh = EditorSession::new(self.session.library());
                self.load(fresh);
            }
            PickerKey::Close => self.picker = None,
        }
    }

    /// Switch to another session and leave the picker
    fn load(&mut self, session: EditorSession<'lib>) {
        self.session = session;
        self.cursor = (0, 0);
        self.picker = None;
        self.mirrored_revision = None;
    }

    fn apply(&mut self, action: EditorAction) {
        match self.session.apply(action) {
            Ok(outcome) => debug!(action = action.as_str(), ?outcome, "applied"),
            Err(e) => debug!(action = action.as_str(), error = %e, "ignored"),
        }
    }

    fn move_cursor(&mut self, rows: i8, cols: i8) {
        let board = self.session.board();
        let step = |at: usize, by: i8, len: usize| {
            at.saturating_add_signed(isize::from(by))
                .min(len.saturating_sub(1))
        };
        self.cursor = (
            step(self.cursor.0, rows, board.rows()),
            step(self.cursor.1, cols, board.cols()),
        );
    }

    fn edit_name(&mut self, edit: NameEdit) {
        let Some(input) = self.name_input.as_mut() else {
            return;
        };
        match edit {
            NameEdit::Insert(c) => input.push(c),
            NameEdit::Backspace => {
                input.pop();
            }
            NameEdit::Commit => {
                if let Some(name) = self.name_input.take() {
                    self.session.set_design_name(name);
                }
            }
            NameEdit::Cancel => self.name_input = None,
        }
    }

    fn collect_toast(&mut self, service: &Service) {
        if let Some((message, severity)) = service.notifier().take() {
            self.toast = Some((message, severity, Instant::now()));
        }
        if self
            .toast
            .as_ref()
            .is_some_and(|(_, _, shown)| shown.elapsed() >= TOAST_TTL)
        {
            self.toast = None;
        }
    }

    fn mirror_if_changed(&mut self, slot: &FileSlot) {
        let revision = self.session.revision();
        if self.mirrored_revision == Some(revision) {
            return;
        }
        if let Err(e) = mirror(slot, self.session.board()) {
            warn!(error = %e, "could not write local board cache");
        }
        self.mirrored_revision = Some(revision);
    }
}
