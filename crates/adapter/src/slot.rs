//! Local board cache.
//!
//! The live board is mirrored to a local slot under [`LOCAL_SLOT_KEY`] after
//! every change and restored from it when no design was opened explicitly.
//! The cache is a convenience: a missing or corrupt entry just means an empty
//! board.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::codec;
use crate::core::{Board, ShapeLibrary};
use crate::engine::EditorSession;
use crate::ports::LocalSlot;
use crate::types::LOCAL_SLOT_KEY;

/// Slot backed by `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl LocalSlot for FileSlot {
    fn load(&self, key: &str) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn store(&self, key: &str, value: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)
    }
}

#[derive(Debug, Default)]
pub struct MemorySlot {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalSlot for MemorySlot {
    fn load(&self, key: &str) -> std::io::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| std::io::Error::other("slot lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> std::io::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| std::io::Error::other("slot lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write the board to the local cache
pub fn mirror(slot: &impl LocalSlot, board: &Board) -> std::io::Result<()> {
    let text = codec::serialize(board).map_err(std::io::Error::other)?;
    slot.store(LOCAL_SLOT_KEY, &text)
}

/// Start a session from the cached board, or an empty one
pub fn restore<'lib>(slot: &impl LocalSlot, library: &'lib ShapeLibrary) -> EditorSession<'lib> {
    let cached = match slot.load(LOCAL_SLOT_KEY) {
        Ok(cached) => cached,
        Err(e) => {
            warn!(error = %e, "local board cache unreadable");
            None
        }
    };
    let board = cached.and_then(|text| match codec::deserialize(&text) {
        Ok(board) => Some(board),
        Err(e) => {
            warn!(error = %e, "discarding corrupt local board cache");
            None
        }
    });
    EditorSession::with_board(library, board.unwrap_or_default())
}
