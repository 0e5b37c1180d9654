use crate::config::{default_state_root, load_global_settings, ConfigError, Settings};
use std::fs;
use std::path::PathBuf;

pub fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

pub fn load_settings() -> Result<Settings, String> {
    load_global_settings().map_err(map_config_err)
}

pub fn ensure_state_root() -> Result<PathBuf, String> {
    let root = default_state_root().map_err(map_config_err)?;
    let logs_dir = root.join("logs");
    fs::create_dir_all(&logs_dir)
        .map_err(|e| format!("failed to create {}: {e}", logs_dir.display()))?;
    Ok(root)
}
