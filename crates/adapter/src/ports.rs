//! Contracts with the collaborators the editor relies on.
//!
//! The editing core never talks to these directly; the design service and
//! the front end hand them serialized boards and plain metadata.

use std::future::Future;
use std::sync::Mutex;

use tracing::{info, warn};

use crate::core::Board;
use crate::design::{Design, DesignSummary, DesignUpdate};
use crate::store::StoreError;
use crate::types::{DesignId, PrincipalId, Severity};

/// Who is signed in
pub trait IdentityProvider {
    fn current_principal(&self) -> Option<PrincipalId>;
}

/// Remote or local document storage for designs
pub trait DocumentStore {
    /// Summaries of every design owned by `owner`
    fn list(
        &self,
        owner: &PrincipalId,
    ) -> impl Future<Output = Result<Vec<DesignSummary>, StoreError>> + Send;

    fn get(&self, id: &DesignId) -> impl Future<Output = Result<Design, StoreError>> + Send;

    /// Store a new design and return its assigned id
    fn save(&self, design: Design) -> impl Future<Output = Result<DesignId, StoreError>> + Send;

    fn update(
        &self,
        id: &DesignId,
        update: DesignUpdate,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn delete(&self, id: &DesignId) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Lets several services share one store
impl<T: DocumentStore> DocumentStore for &T {
    fn list(
        &self,
        owner: &PrincipalId,
    ) -> impl Future<Output = Result<Vec<DesignSummary>, StoreError>> + Send {
        (**self).list(owner)
    }

    fn get(&self, id: &DesignId) -> impl Future<Output = Result<Design, StoreError>> + Send {
        (**self).get(id)
    }

    fn save(&self, design: Design) -> impl Future<Output = Result<DesignId, StoreError>> + Send {
        (**self).save(design)
    }

    fn update(
        &self,
        id: &DesignId,
        update: DesignUpdate,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).update(id, update)
    }

    fn delete(&self, id: &DesignId) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).delete(id)
    }
}

/// Turns the visible board into image bytes
pub trait Rasterizer {
    fn capture(&self, board: &Board) -> std::io::Result<Vec<u8>>;
}

/// Fire-and-forget user feedback
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Small synchronous key-value cache local to this machine
pub trait LocalSlot {
    fn load(&self, key: &str) -> std::io::Result<Option<String>>;
    fn store(&self, key: &str, value: &str) -> std::io::Result<()>;
}

/// Identity fixed at construction
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<PrincipalId>);

impl IdentityProvider for StaticIdentity {
    fn current_principal(&self) -> Option<PrincipalId> {
        self.0.clone()
    }
}

/// Keeps the latest notification for display and logs every one
#[derive(Debug, Default)]
pub struct ToastNotifier {
    last: Mutex<Option<(String, Severity)>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest notification, if any
    pub fn last(&self) -> Option<(String, Severity)> {
        self.last.lock().ok().and_then(|last| last.clone())
    }

    /// Take and clear the latest notification
    pub fn take(&self) -> Option<(String, Severity)> {
        self.last.lock().ok().and_then(|mut last| last.take())
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => info!(message, "notify"),
            Severity::Error => warn!(message, "notify"),
        }
        if let Ok(mut last) = self.last.lock() {
            *last = Some((message.to_string(), severity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_keeps_latest_message() {
        let toasts = ToastNotifier::new();
        toasts.notify("first", Severity::Success);
        toasts.notify("second", Severity::Error);
        assert_eq!(toasts.last(), Some(("second".to_string(), Severity::Error)));
        assert!(toasts.take().is_some());
        assert_eq!(toasts.last(), None);
    }

    #[test]
    fn static_identity_returns_its_principal() {
        assert_eq!(StaticIdentity(None).current_principal(), None);
        let ana = PrincipalId::new("ana");
        assert_eq!(StaticIdentity(Some(ana.clone())).current_principal(), Some(ana));
    }
}
