//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/dev-cli/`, `~/.cache/dev-cli/`
//! - macOS: `~/Library/Application Support/dev-cli/`, `~/Library/Caches/dev-cli/`
//! - Windows: `%APPDATA%\dev-cli\`, `%LOCALAPPDATA%\dev-cli\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "dev-cli";

/// Get the application config directory, without creating it
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Get the application cache directory and make sure it exists
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Path of the config file inside the platform config directory
pub fn app_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
