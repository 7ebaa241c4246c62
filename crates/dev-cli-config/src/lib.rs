//! Configuration for the dev CLI
//!
//! This crate provides:
//! - Config and cache directory resolution
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{config_candidates, load_config_file, read_first_existing};
pub use paths::{cache_dir, config_dir};
