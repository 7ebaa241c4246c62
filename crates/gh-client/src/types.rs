//! Wire types returned by `gh pr status --json`
//!
//! Field names follow the camelCase JSON emitted by the GitHub CLI.

use crate::error::GhCliError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top level object printed by `gh pr status --json=...`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrStatusResponse {
    /// Pull request associated with the current branch (or the given identifier)
    #[serde(default)]
    pub current_branch: Option<PullRequestStatus>,
}

/// Status of a single pull request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestStatus {
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub additions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_ref_name: String,
    #[serde(default)]
    pub changed_files: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub head_ref_name: String,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub commits: Vec<Commit>,
    /// Merge readiness classification, kept verbatim
    #[serde(default, deserialize_with = "null_as_default")]
    pub merge_state_status: MergeStateStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mergeable: String,
    /// Status checks in the order reported by GitHub
    #[serde(default, deserialize_with = "null_as_default")]
    pub status_check_rollup: Vec<StatusCheckRollup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// A commit on the pull request head
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub authored_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub oid: String,
}

/// One entry of `statusCheckRollup`
///
/// Check runs fill `name`, `status` and `conclusion`, legacy commit statuses
/// fill `context` and `state`. Everything is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCheckRollup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conclusion: String,
    #[serde(default, rename = "detailsUrl", deserialize_with = "null_as_default")]
    pub details_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Provider reported merge readiness (`mergeStateStatus`)
///
/// Values outside the known vocabulary are kept in `Other` so nothing is
/// lost or re-cased on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MergeStateStatus {
    /// The head ref is out of date
    Behind,
    /// The merge is blocked
    Blocked,
    /// Mergeable and passing commit status
    Clean,
    /// The merge commit cannot be cleanly created
    Dirty,
    /// The merge is blocked due to the pull request being a draft
    Draft,
    /// Mergeable with passing commit status and pre-receive hooks
    HasHooks,
    /// The state cannot currently be determined
    Unknown,
    /// Mergeable with non-passing commit status
    Unstable,
    /// Anything else, including the empty string
    Other(String),
}

impl MergeStateStatus {
    /// The exact string as reported by GitHub
    pub fn as_str(&self) -> &str {
        match self {
            Self::Behind => "BEHIND",
            Self::Blocked => "BLOCKED",
            Self::Clean => "CLEAN",
            Self::Dirty => "DIRTY",
            Self::Draft => "DRAFT",
            Self::HasHooks => "HAS_HOOKS",
            Self::Unknown => "UNKNOWN",
            Self::Unstable => "UNSTABLE",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// No usable classification was reported
    pub fn is_empty_or_unknown(&self) -> bool {
        match self {
            Self::Unknown => true,
            Self::Other(raw) => raw.is_empty(),
            _ => false,
        }
    }
}

impl Default for MergeStateStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for MergeStateStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BEHIND" => Self::Behind,
            "BLOCKED" => Self::Blocked,
            "CLEAN" => Self::Clean,
            "DIRTY" => Self::Dirty,
            "DRAFT" => Self::Draft,
            "HAS_HOOKS" => Self::HasHooks,
            "UNKNOWN" => Self::Unknown,
            "UNSTABLE" => Self::Unstable,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for MergeStateStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<MergeStateStatus> for String {
    fn from(status: MergeStateStatus) -> Self {
        match status {
            MergeStateStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MergeStateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Merge method for pull requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    /// Squash all commits into one
    #[default]
    Squash,
    /// Create a merge commit
    Merge,
    /// Rebase commits onto the base branch
    Rebase,
}

impl MergeMethod {
    /// All methods in the order they are offered to the user
    pub const ALL: [MergeMethod; 3] = [Self::Squash, Self::Merge, Self::Rebase];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Squash => "squash",
            Self::Merge => "merge",
            Self::Rebase => "rebase",
        }
    }

    /// Flag understood by `gh pr merge`
    pub fn gh_flag(&self) -> &'static str {
        match self {
            Self::Squash => "--squash",
            Self::Merge => "--merge",
            Self::Rebase => "--rebase",
        }
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeMethod {
    type Err = GhCliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squash" => Ok(Self::Squash),
            "merge" => Ok(Self::Merge),
            "rebase" => Ok(Self::Rebase),
            other => Err(GhCliError::InvalidStrategy(other.to_string())),
        }
    }
}
