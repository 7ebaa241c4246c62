use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".dev-cli.toml";

/// Locations searched for a config file, in priority order
///
/// 1. `.dev-cli.toml` in the current working directory
/// 2. `~/.dev-cli.toml`
/// 3. `config.toml` in the platform config directory
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        candidates.push(home_config);
    }
    if let Some(app_config) = crate::paths::app_config_path() {
        candidates.push(app_config);
    }
    candidates
}

/// Load config file content from the first candidate that can be read
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    read_first_existing(&config_candidates()).map(|(_, content)| content)
}

/// Read the first readable file of `candidates`
pub fn read_first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|candidate| {
        let path = candidate.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some((path.to_path_buf(), content))
            }
            Err(_) => None,
        }
    })
}

/// Get the path to the config file in the home directory
fn get_home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}
