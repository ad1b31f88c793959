use crate::index::types::IndexConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "bookdex";
const CONFIG_FILE: &str = "config.json";

/// Get the path of the per-user config file, if a config directory exists
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Load indexer config from `explicit`, else the per-user config file, else defaults
pub fn load_config(explicit: Option<&Path>) -> Result<IndexConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    match get_config_path() {
        Some(path) if path.exists() => match read_config(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("ignoring {}: {:#}", path.display(), e);
                Ok(IndexConfig::default())
            }
        },
        _ => Ok(IndexConfig::default()),
    }
}

/// Read a JSON config file; missing fields take their defaults
pub fn read_config(path: &Path) -> Result<IndexConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: IndexConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}
