//! Application configuration
//!
//! Configuration loaded from `.dev-cli.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from `.dev-cli.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Name or path of the GitHub CLI executable
    #[serde(default = "default_gh_command")]
    pub gh_command: String,

    /// Number of countdown ticks between confirming a strategy and merging
    #[serde(default = "default_merge_countdown_ticks")]
    pub merge_countdown_ticks: u32,

    /// Length of one countdown tick in milliseconds
    #[serde(default = "default_countdown_interval_ms")]
    pub countdown_interval_ms: u64,

    /// How long the cancellation notice stays visible before the selector resets
    #[serde(default = "default_cancel_delay_ms")]
    pub cancel_delay_ms: u64,

    /// How long the success message stays visible before the session ends
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

fn default_gh_command() -> String {
    "gh".to_string()
}

fn default_merge_countdown_ticks() -> u32 {
    2
}

fn default_countdown_interval_ms() -> u64 {
    1000
}

fn default_cancel_delay_ms() -> u64 {
    1000
}

fn default_exit_delay_ms() -> u64 {
    1500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gh_command: default_gh_command(),
            merge_countdown_ticks: default_merge_countdown_ticks(),
            countdown_interval_ms: default_countdown_interval_ms(),
            cancel_delay_ms: default_cancel_delay_ms(),
            exit_delay_ms: default_exit_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, then the config dir, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Load config from an explicit path; errors are returned, not swallowed
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded app config from {}", path.display());
        Ok(config)
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms)
    }

    pub fn cancel_delay(&self) -> Duration {
        Duration::from_millis(self.cancel_delay_ms)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.gh_command, "gh");
        assert_eq!(config.merge_countdown_ticks, 2);
        assert_eq!(config.countdown_interval(), Duration::from_secs(1));
        assert_eq!(config.cancel_delay(), Duration::from_secs(1));
        assert_eq!(config.exit_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            gh_command = "/opt/homebrew/bin/gh"
            merge_countdown_ticks = 5
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.gh_command, "/opt/homebrew/bin/gh");
        assert_eq!(config.merge_countdown_ticks, 5);
        // Other fields should use defaults
        assert_eq!(config.countdown_interval_ms, 1000);
        assert_eq!(config.exit_delay_ms, 1500);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AppConfig::load_from(Path::new("/definitely/not/here/.dev-cli.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let path = std::env::temp_dir().join(format!("dev-cli-invalid-{}.toml", std::process::id()));
        std::fs::write(&path, "merge_countdown_ticks = \"many\"").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        std::fs::remove_file(path).unwrap();
    }
}
