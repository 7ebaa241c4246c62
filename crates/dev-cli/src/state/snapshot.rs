//! Pull request status snapshot
//!
//! One snapshot is built per status query and never modified afterwards.

use gh_client::{MergeStateStatus, PullRequestStatus, StatusCheckRollup};

/// Result of one status query
#[derive(Debug, Clone, PartialEq)]
pub struct PrSnapshot {
    /// Branch name or number the query was made for (empty = current checkout)
    pub identifier: String,
    pub title: String,
    pub base_branch: String,
    pub head_branch: String,
    pub is_draft: bool,
    pub is_closed: bool,
    /// Merge readiness exactly as reported by GitHub
    pub merge_readiness: MergeStateStatus,
    /// Checks in provider order
    pub checks: Vec<CheckResult>,
}

impl PrSnapshot {
    pub fn from_status(identifier: &str, status: &PullRequestStatus) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: status.title.clone(),
            base_branch: status.base_ref_name.clone(),
            head_branch: status.head_ref_name.clone(),
            is_draft: status.is_draft,
            is_closed: status.closed,
            merge_readiness: status.merge_state_status.clone(),
            checks: status
                .status_check_rollup
                .iter()
                .map(CheckResult::from_rollup)
                .collect(),
        }
    }

    /// No checks and no readiness classification: there is no open pull request
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty() && self.merge_readiness.is_empty_or_unknown()
    }

    /// Title line of the header: `# title  (head -> base)`
    pub fn header_line(&self) -> String {
        format!(
            "# {}  ({} -> {})",
            self.title, self.head_branch, self.base_branch
        )
    }
}

/// Icon class of a check outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Success,
    Skipped,
    Failure,
    Unknown,
}

impl CheckOutcome {
    /// Classify an outcome string, ignoring case
    pub fn classify(outcome: &str) -> Self {
        match outcome.to_lowercase().as_str() {
            "success" => Self::Success,
            "skipped" => Self::Skipped,
            "failure" => Self::Failure,
            _ => Self::Unknown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Skipped => "■",
            Self::Failure => "✗",
            Self::Unknown => "?",
        }
    }
}

/// One CI or commit status check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub context: String,
    pub conclusion: String,
    pub state: String,
    pub status: String,
    pub details_url: Option<String>,
}

impl CheckResult {
    pub fn from_rollup(rollup: &StatusCheckRollup) -> Self {
        Self {
            name: rollup.name.clone(),
            context: rollup.context.clone(),
            conclusion: rollup.conclusion.clone(),
            state: rollup.state.clone(),
            status: rollup.status.clone(),
            details_url: (!rollup.details_url.is_empty()).then(|| rollup.details_url.clone()),
        }
    }

    /// Friendly name, falling back to the raw context key
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.context
        } else {
            &self.name
        }
    }

    /// Outcome text, see [`resolve_outcome`]
    pub fn outcome(&self) -> &str {
        resolve_outcome(&self.conclusion, &self.state, &self.status)
    }

    pub fn outcome_kind(&self) -> CheckOutcome {
        CheckOutcome::classify(self.outcome())
    }

    /// `"<icon> <outcome>"`, never empty
    pub fn description(&self) -> String {
        format!("{} {}", self.outcome_kind().icon(), self.outcome())
    }
}

/// First non-empty of `conclusion`, `state`, `status`
///
/// An empty conclusion means the check has not concluded yet, not that it failed.
pub fn resolve_outcome<'a>(conclusion: &'a str, state: &'a str, status: &'a str) -> &'a str {
    [conclusion, state, status]
        .into_iter()
        .find(|value| !value.is_empty())
        .unwrap_or("")
}
