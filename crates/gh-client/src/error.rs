//! Errors raised while talking to the `gh` binary

use thiserror::Error;

/// Failure of a single `gh` invocation
#[derive(Debug, Error)]
pub enum GhCliError {
    /// The process could not be started (binary missing, permissions, ...)
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The JSON printed by `gh` could not be decoded
    #[error("failed to parse gh output: {0}")]
    Parse(#[from] serde_json::Error),

    /// A merge strategy outside of squash/merge/rebase was requested
    #[error("missing or invalid merge strategy `{0}`")]
    InvalidStrategy(String),
}
