//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//!
//! > **This module contains data only, no policy, no validation.**

use std::path::{Path, PathBuf};

pub const CATALOG_FILE_NAME: &str = "catalog.json";
pub const STATE_DIR_NAME: &str = "state";
pub const LOG_DIR_NAME: &str = "logs";

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog document path (path info only, no existence check)
    pub catalog_path: PathBuf,

    /// Directory holding one file per persisted UI state key
    pub state_dir: PathBuf,

    /// Log directory. `None` disables file logging.
    pub log_dir: Option<PathBuf>,

    /// Filter directive overriding the default log level (e.g. `"debug"`)
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation.
    /// Missing keys map to empty paths; that is a fact, not an error.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Ok(Self {
            catalog_path: PathBuf::from(str_at("storage", "catalog_path").unwrap_or_default()),
            state_dir: PathBuf::from(str_at("storage", "state_dir").unwrap_or_default()),
            log_dir: str_at("logging", "log_dir").map(PathBuf::from),
            log_level: str_at("logging", "level"),
        })
    }

    /// Layout used when no configuration file exists: everything under `base`.
    pub fn with_data_dir(base: &Path) -> Self {
        Self {
            catalog_path: base.join(CATALOG_FILE_NAME),
            state_dir: base.join(STATE_DIR_NAME),
            log_dir: Some(base.join(LOG_DIR_NAME)),
            log_level: None,
        }
    }
}
