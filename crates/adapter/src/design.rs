//! Stored design records.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::types::{DesignId, PrincipalId};

/// A named board owned by one principal
///
/// `grid` holds the board in the codec's text form; the store never looks
/// inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DesignId>,
    pub name: String,
    pub owner: PrincipalId,
    pub grid: String,
    /// Milliseconds since the Unix epoch
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl Design {
    pub fn summary(&self) -> Option<DesignSummary> {
        self.id.clone().map(|id| DesignSummary {
            id,
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Fields changed when an existing design is saved again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignUpdate {
    pub name: String,
    pub grid: String,
    pub updated_at: u64,
}

/// Listing entry for a stored design
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub id: DesignId,
    pub name: String,
    pub created_at: u64,
    pub updated_at: Option<u64>,
}

/// Current time in milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_design_omits_id_and_update_time() {
        let design = Design {
            id: None,
            name: "heart".to_string(),
            owner: PrincipalId::new("ana"),
            grid: "[]".to_string(),
            created_at: 5,
            updated_at: None,
        };
        let json = serde_json::to_string(&design).unwrap();
        assert_eq!(
            json,
            r#"{"name":"heart","owner":"ana","grid":"[]","created_at":5}"#
        );
        assert!(design.summary().is_none());
    }
}
