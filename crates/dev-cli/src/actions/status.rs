//! Pull request status actions

use crate::state::PrSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum StatusAction {
    /// Start the single status query of this session
    Poll,
    /// Status query returned an open pull request
    Received(PrSnapshot),
    /// Status query failed (transport, auth, not found)
    Failed(String),
    /// Pull request exists but is already closed
    Closed,
    /// Nothing to show for the current branch
    NoPullRequest,
}
