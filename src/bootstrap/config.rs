//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Parse TOML into the AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - Fill paths the file leaves out from the default data directory
//!
//! `load_config` accepts whatever is in the file. Defaults are applied
//! afterwards by `resolve_config`, never while parsing.

use anyhow::Context;
use std::path::{Path, PathBuf};
use ledger_core::config::AppConfig;

pub const APP_DIR_NAME: &str = "product-ledger";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Default data directory: `<platform data dir>/product-ledger`.
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to determine the platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Resolves the configuration the shell runs with.
///
/// - An explicit path must exist and parse.
/// - Otherwise `<data_dir>/config.toml` is used when present.
/// - Otherwise everything lives under `data_dir`.
///
/// Paths a config file leaves empty are taken from the `data_dir` layout.
pub fn resolve_config(explicit: Option<PathBuf>, data_dir: &Path) -> anyhow::Result<AppConfig> {
    let loaded = match explicit {
        Some(path) => Some(load_config(path)?),
        None => {
            let candidate = data_dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                Some(load_config(candidate)?)
            } else {
                None
            }
        }
    };

    let defaults = AppConfig::with_data_dir(data_dir);
    let Some(mut config) = loaded else {
        return Ok(defaults);
    };

    if config.catalog_path.as_os_str().is_empty() {
        config.catalog_path = defaults.catalog_path;
    }
    if config.state_dir.as_os_str().is_empty() {
        config.state_dir = defaults.state_dir;
    }
    Ok(config)
}
