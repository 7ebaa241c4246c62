//! How a session ended

use gh_client::MergeMethod;
use std::fmt;

/// Terminal state of a session, printed once the terminal is restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionExit {
    /// Pull request merged with the given strategy
    Merged(MergeMethod),
    /// User left without merging
    UserQuit,
    /// No open pull request for the branch
    NoPullRequest,
    /// Pull request is already closed
    Closed,
    /// Status query failed
    StatusFailed(String),
    /// Merge call failed
    MergeFailed(String),
    /// User left while the merge call was still running
    MergeDetached(MergeMethod),
}

impl SessionExit {
    /// Process exit code for the shell
    pub fn exit_code(&self) -> i32 {
        if self.is_error() {
            1
        } else {
            0
        }
    }

    /// Transport or merge failures, as opposed to informational exits
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::StatusFailed(_) | Self::MergeFailed(_) | Self::MergeDetached(_)
        )
    }
}

impl fmt::Display for SessionExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merged(method) => write!(f, "✓ pull request merged ({})", method),
            Self::UserQuit => f.write_str("merge cancelled"),
            Self::NoPullRequest => f.write_str("no open pull request found for this branch"),
            Self::Closed => f.write_str("pull request already closed"),
            Self::StatusFailed(reason) => write!(f, "error: {}", reason),
            Self::MergeFailed(reason) => write!(f, "error: merge failed: {}", reason),
            Self::MergeDetached(method) => write!(
                f,
                "error: left while merging ({}), check the pull request for the result",
                method
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_codes() {
        let cases = [
            (
                SessionExit::Merged(MergeMethod::Squash),
                "✓ pull request merged (squash)",
                0,
            ),
            (SessionExit::UserQuit, "merge cancelled", 0),
            (
                SessionExit::NoPullRequest,
                "no open pull request found for this branch",
                0,
            ),
            (SessionExit::Closed, "pull request already closed", 0),
            (
                SessionExit::StatusFailed("gh: not found".to_string()),
                "error: gh: not found",
                1,
            ),
            (
                SessionExit::MergeFailed("conflict".to_string()),
                "error: merge failed: conflict",
                1,
            ),
            (
                SessionExit::MergeDetached(MergeMethod::Rebase),
                "error: left while merging (rebase), check the pull request for the result",
                1,
            ),
        ];

        for (exit, message, code) in cases {
            assert_eq!(exit.to_string(), message);
            assert_eq!(exit.exit_code(), code);
        }
    }
}
