//! Runtime configuration read from the environment.
//!
//! - `TETRIS_ART_DATA_DIR`: where designs and the local cache live (default `.tetris-art`)
//! - `TETRIS_ART_USER`: signed-in user; falls back to `USER`
//! - `TETRIS_ART_DESIGN`: id of a stored design to open on start
//! - `TETRIS_ART_LOG_PATH`: file to write logs to (no logging when unset)

use std::path::PathBuf;

use crate::ports::StaticIdentity;
use crate::types::{DesignId, PrincipalId};

pub const DEFAULT_DATA_DIR: &str = ".tetris-art";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub user: Option<String>,
    pub design: Option<DesignId>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            user: None,
            design: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let data_dir = var("TETRIS_ART_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let user = var("TETRIS_ART_USER").or_else(|| var("USER"));
        let design = var("TETRIS_ART_DESIGN").map(DesignId::new);
        let log_path = var("TETRIS_ART_LOG_PATH").map(PathBuf::from);

        Self {
            data_dir,
            user,
            design,
            log_path,
        }
    }

    /// Directory holding one file per stored design
    pub fn designs_dir(&self) -> PathBuf {
        self.data_dir.join("designs")
    }

    pub fn identity(&self) -> StaticIdentity {
        StaticIdentity(self.user.clone().map(PrincipalId::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.designs_dir(), PathBuf::from(".tetris-art/designs"));
    }

    #[test]
    fn explicit_user_wins_over_login_name() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TETRIS_ART_USER", "ana"),
            ("USER", "root"),
            ("TETRIS_ART_DESIGN", "design-3"),
            ("TETRIS_ART_LOG_PATH", "  "),
        ]));
        assert_eq!(config.user.as_deref(), Some("ana"));
        assert_eq!(config.design, Some(DesignId::new("design-3")));
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn login_name_is_the_fallback_user() {
        let config = AppConfig::from_lookup(lookup(&[("USER", "root")]));
        assert_eq!(config.user.as_deref(), Some("root"));
    }
}
