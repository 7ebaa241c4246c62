//! GitHub accessor backed by the `gh` command line tool
//!
//! This crate provides a trait-based GitHub client. The interactive merge
//! session only depends on the [`GitHubClient`] trait, so tests can swap in a
//! fake implementation while the binary uses [`GhCliClient`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - auth_status()                                 │
//! │  - view_pull_request()                           │
//! │  - pr_status()                                   │
//! │  - create_pull_request()                         │
//! │  - merge_pull_request()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │   GhCliClient   │
//!              │  (spawns `gh`)  │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GhCliClient, GitHubClient, MergeMethod};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GhCliClient::new("gh");
//! client.auth_status().await?;
//!
//! let status = client.pr_status("").await?;
//! if let Some(pr) = status.current_branch {
//!     println!("{} is {}", pr.title, pr.merge_state_status);
//! }
//!
//! client.merge_pull_request("", MergeMethod::Squash).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod gh_cli_client;
pub mod types;

/// Default name of the GitHub CLI binary
pub const DEFAULT_GH_COMMAND: &str = "gh";

pub use client::GitHubClient;
pub use error::GhCliError;
pub use gh_cli_client::GhCliClient;
pub use types::{
    Commit, MergeMethod, MergeStateStatus, PrStatusResponse, PullRequestStatus, StatusCheckRollup,
};
