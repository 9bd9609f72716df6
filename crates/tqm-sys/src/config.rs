//! Application configuration.
//!
//! There is deliberately very little of it: where the slot files live and
//! the shared admin secret the auth gate checks. Both have defaults, so an
//! embedding shell may skip the config file entirely.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default of the shared admin secret. A fixed literal by design; see the
/// auth module for the threat model.
pub const DEFAULT_ADMIN_SECRET: &str = "305071";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding one JSON slot file per collection.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Secret required to confirm mutating actions.
    #[serde(default = "default_admin_secret")]
    pub admin_secret: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tqm-sys")
}

fn default_admin_secret() -> String {
    DEFAULT_ADMIN_SECRET.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            admin_secret: default_admin_secret(),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
