//! Save, open, list, delete and export flows for designs.
//!
//! The service sits between an editing session and the collaborators. Store
//! failures are reported through the notifier and returned to the caller;
//! they never touch the session's board or history.

use thiserror::Error;
use tracing::info;

use crate::codec::{self, CodecError};
use crate::core::{Board, ShapeLibrary};
use crate::design::{now_ms, Design, DesignSummary, DesignUpdate};
use crate::engine::EditorSession;
use crate::ports::{DocumentStore, IdentityProvider, Notifier, Rasterizer};
use crate::store::StoreError;
use crate::types::{DesignId, PrincipalId, Severity};

/// File name used when exporting a design without a name
pub const DEFAULT_EXPORT_STEM: &str = "tetris-art";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("design name is empty")]
    MissingName,
    #[error("no signed-in user")]
    NotSignedIn,
    #[error("design `{0}` belongs to another user")]
    Forbidden(DesignId),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("export failed: {0}")]
    Export(#[from] std::io::Error),
}

/// An exported image ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `<name>.png`, falling back to `tetris-art.png` for unnamed designs
pub fn export_file_name(design_name: &str) -> String {
    let stem = design_name.trim();
    let stem = if stem.is_empty() { DEFAULT_EXPORT_STEM } else { stem };
    format!("{stem}.png")
}

pub struct DesignService<S, I, N> {
    store: S,
    identity: I,
    notifier: N,
}

impl<S, I, N> DesignService<S, I, N>
where
    S: DocumentStore,
    I: IdentityProvider,
    N: Notifier,
{
    pub fn new(store: S, identity: I, notifier: N) -> Self {
        Self {
            store,
            identity,
            notifier,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Save the session's board under its design name
    ///
    /// Creates a new design the first time (the session adopts the new id)
    /// and updates the existing one afterwards.
    pub async fn save(&self, session: &mut EditorSession<'_>) -> Result<DesignId, ServiceError> {
        let name = session.design_name().trim().to_string();
        if name.is_empty() {
            self.notifier
                .notify("Please enter design name", Severity::Error);
            return Err(ServiceError::MissingName);
        }
        let Some(owner) = self.identity.current_principal() else {
            self.notifier.notify("Please sign in to save", Severity::Error);
            return Err(ServiceError::NotSignedIn);
        };

        let result = self.save_as(session, &owner, name).await;
        match &result {
            Ok(id) if session.design_id() == Some(id) => {}
            Ok(id) => session.set_design_id(id.clone()),
            Err(e) => self
                .notifier
                .notify(&format!("Save failed: {e}"), Severity::Error),
        }
        result
    }

    async fn save_as(
        &self,
        session: &EditorSession<'_>,
        owner: &PrincipalId,
        name: String,
    ) -> Result<DesignId, ServiceError> {
        let grid = codec::serialize(session.board())?;

        if let Some(id) = session.design_id() {
            let existing = self.store.get(id).await?;
            if &existing.owner != owner {
                return Err(ServiceError::Forbidden(id.clone()));
            }
            self.store
                .update(
                    id,
                    DesignUpdate {
                        name,
                        grid,
                        updated_at: now_ms(),
                    },
                )
                .await?;
            info!(%id, "design updated");
            self.notifier
                .notify("Design updated successfully!", Severity::Success);
            return Ok(id.clone());
        }

        let id = self
            .store
            .save(Design {
                id: None,
                name,
                owner: owner.clone(),
                grid,
                created_at: now_ms(),
                updated_at: None,
            })
            .await?;
        info!(%id, "design created");
        self.notifier
            .notify("Design saved successfully!", Severity::Success);
        Ok(id)
    }

    /// Designs owned by the signed-in user
    pub async fn list(&self) -> Result<Vec<DesignSummary>, ServiceError> {
        let Some(owner) = self.identity.current_principal() else {
            self.notifier
                .notify("Please sign in to view designs", Severity::Error);
            return Err(ServiceError::NotSignedIn);
        };
        self.store.list(&owner).await.map_err(|e| {
            self.notifier
                .notify(&format!("Could not load designs: {e}"), Severity::Error);
            e.into()
        })
    }

    /// Open a stored design in a fresh session
    pub async fn open<'lib>(
        &self,
        library: &'lib ShapeLibrary,
        id: &DesignId,
    ) -> Result<EditorSession<'lib>, ServiceError> {
        let result = self.load_owned(id).await;
        match result {
            Ok((board, name)) => Ok(EditorSession::with_design(library, board, id.clone(), name)),
            Err(e) => {
                self.notifier
                    .notify(&format!("Could not open design: {e}"), Severity::Error);
                Err(e)
            }
        }
    }

    async fn load_owned(&self, id: &DesignId) -> Result<(Board, String), ServiceError> {
        let owner = self
            .identity
            .current_principal()
            .ok_or(ServiceError::NotSignedIn)?;
        let design = self.store.get(id).await?;
        if design.owner != owner {
            return Err(ServiceError::Forbidden(id.clone()));
        }
        let board = codec::deserialize(&design.grid)?;
        Ok((board, design.name))
    }

    /// Delete a design; only its owner may do so
    pub async fn delete(&self, id: &DesignId) -> Result<(), ServiceError> {
        let result = self.delete_owned(id).await;
        match &result {
            Ok(()) => self.notifier.notify("Design deleted", Severity::Success),
            Err(e) => self
                .notifier
                .notify(&format!("Delete failed: {e}"), Severity::Error),
        }
        result
    }

    async fn delete_owned(&self, id: &DesignId) -> Result<(), ServiceError> {
        let owner = self
            .identity
            .current_principal()
            .ok_or(ServiceError::NotSignedIn)?;
        let design = self.store.get(id).await?;
        if design.owner != owner {
            return Err(ServiceError::Forbidden(id.clone()));
        }
        self.store.delete(id).await?;
        info!(%id, "design deleted");
        Ok(())
    }
}

/// Capture the session's board as an image named after the design
pub fn export(
    rasterizer: &impl Rasterizer,
    session: &EditorSession<'_>,
) -> Result<Export, ServiceError> {
    let bytes = rasterizer.capture(session.board())?;
    Ok(Export {
        file_name: export_file_name(session.design_name()),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_name_falls_back_for_blank_names() {
        assert_eq!(export_file_name("heart"), "heart.png");
        assert_eq!(export_file_name("   "), "tetris-art.png");
        assert_eq!(export_file_name(""), "tetris-art.png");
    }
}
