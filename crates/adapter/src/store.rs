//! Document store implementations.
//!
//! - [`MemoryStore`]: process-local map, used by tests and ephemeral sessions
//! - [`FileStore`]: one JSON file per design under a data directory

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::design::{now_ms, Design, DesignSummary, DesignUpdate};
use crate::ports::DocumentStore;
use crate::types::{DesignId, PrincipalId};

/// Attempts at picking an unused file name before giving up
const MAX_ID_ATTEMPTS: u32 = 8;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("design `{0}` not found")]
    NotFound(DesignId),
    #[error("invalid design id `{0}`")]
    InvalidId(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored design is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

fn summaries(designs: impl Iterator<Item = Design>, owner: &PrincipalId) -> Vec<DesignSummary> {
    let mut owned: Vec<Design> = designs.filter(|d| &d.owner == owner).collect();
    owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    owned.iter().filter_map(Design::summary).collect()
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    designs: RwLock<BTreeMap<DesignId, Design>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.designs.read().await.len()
    }
}

impl DocumentStore for MemoryStore {
    async fn list(&self, owner: &PrincipalId) -> Result<Vec<DesignSummary>, StoreError> {
        let designs = self.designs.read().await;
        Ok(summaries(designs.values().cloned(), owner))
    }

    async fn get(&self, id: &DesignId) -> Result<Design, StoreError> {
        let designs = self.designs.read().await;
        designs
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn save(&self, mut design: Design) -> Result<DesignId, StoreError> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let id = DesignId::new(format!("design-{n}"));
        design.id = Some(id.clone());
        self.designs.write().await.insert(id.clone(), design);
        Ok(id)
    }

    async fn update(&self, id: &DesignId, update: DesignUpdate) -> Result<(), StoreError> {
        let mut designs = self.designs.write().await;
        let design = designs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        design.name = update.name;
        design.grid = update.grid;
        design.updated_at = Some(update.updated_at);
        Ok(())
    }

    async fn delete(&self, id: &DesignId) -> Result<(), StoreError> {
        match self.designs.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id.clone())),
        }
    }
}

/// Stores each design as `<dir>/<id>.json`
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    counter: AtomicU64,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &DesignId) -> Result<PathBuf, StoreError> {
        let raw = id.as_str();
        let valid = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(raw.to_string()));
        }
        Ok(self.dir.join(format!("{raw}.json")))
    }

    fn fresh_id(&self) -> DesignId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        DesignId::new(format!("{:x}-{n}", now_ms()))
    }

    async fn read(&self, id: &DesignId) -> Result<Design, StoreError> {
        let path = self.path_for(id)?;
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.clone()))
            }
            Err(e) => return Err(e.into()),
        };
        let mut design: Design = serde_json::from_str(&text)?;
        design.id = Some(id.clone());
        Ok(design)
    }
}

impl DocumentStore for FileStore {
    async fn list(&self, owner: &PrincipalId) -> Result<Vec<DesignSummary>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut designs = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.read(&DesignId::new(stem)).await {
                Ok(design) => designs.push(design),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable design"),
            }
        }
        Ok(summaries(designs.into_iter(), owner))
    }

    async fn get(&self, id: &DesignId) -> Result<Design, StoreError> {
        self.read(id).await
    }

    async fn save(&self, mut design: Design) -> Result<DesignId, StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.fresh_id();
            let path = self.path_for(&id)?;
            let file = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;
            let mut file = match file {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            design.id = Some(id.clone());
            let json = serde_json::to_vec_pretty(&design)?;
            file.write_all(&json).await?;
            file.flush().await?;
            debug!(%id, path = %path.display(), "design written");
            return Ok(id);
        }
        Err(std::io::Error::new(ErrorKind::AlreadyExists, "could not allocate a design id").into())
    }

    async fn update(&self, id: &DesignId, update: DesignUpdate) -> Result<(), StoreError> {
        let mut design = self.read(id).await?;
        design.name = update.name;
        design.grid = update.grid;
        design.updated_at = Some(update.updated_at);
        let json = serde_json::to_vec_pretty(&design)?;
        tokio::fs::write(self.path_for(id)?, json).await?;
        Ok(())
    }

    async fn delete(&self, id: &DesignId) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path_for(id)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(id.clone())),
            Err(e) => Err(e.into()),
        }
    }
}
