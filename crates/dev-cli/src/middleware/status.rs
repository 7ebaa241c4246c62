//! Status Middleware
//!
//! Queries the pull request status through `gh` once per session and turns
//! the response into a `Status` action:
//! - `Received` for an open pull request with a status snapshot
//! - `NoPullRequest`, `Closed` or `Failed` when the session cannot continue

use crate::actions::{Action, StatusAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, PrSnapshot, SessionViewMode};
use gh_client::{GitHubClient, PrStatusResponse};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Middleware for the pull request status query
pub struct StatusMiddleware {
    runtime: Handle,
    client: Arc<dyn GitHubClient>,
    /// The status is queried at most once per session
    polled: bool,
}

impl StatusMiddleware {
    pub fn new(runtime: Handle, client: Arc<dyn GitHubClient>) -> Self {
        Self {
            runtime,
            client,
            polled: false,
        }
    }
}

impl Middleware for StatusMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Status(StatusAction::Poll) = action {
            if self.polled || state.view_mode != SessionViewMode::CheckingStatus {
                log::debug!("StatusMiddleware: status already requested, ignoring poll");
                return false;
            }
            self.polled = true;

            let client = Arc::clone(&self.client);
            let dispatcher = dispatcher.clone();
            let identifier = state.identifier.clone();

            log::info!(
                "StatusMiddleware: querying status for {:?}",
                if identifier.is_empty() {
                    "current branch"
                } else {
                    identifier.as_str()
                }
            );

            self.runtime.spawn(async move {
                let result = client.pr_status(&identifier).await;
                dispatcher.dispatch(Action::Status(classify_status(&identifier, result)));
            });

            // Poll only starts the query
            return false;
        }

        true
    }
}

/// Map a status query result to the action the session continues with
pub fn classify_status(identifier: &str, result: anyhow::Result<PrStatusResponse>) -> StatusAction {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            log::error!("Status query failed: {:#}", e);
            return StatusAction::Failed(format!("{:#}", e));
        }
    };

    let Some(status) = response.current_branch else {
        log::info!("No pull request found");
        return StatusAction::NoPullRequest;
    };

    if status.closed {
        log::info!("Pull request {:?} is closed", status.title);
        return StatusAction::Closed;
    }

    let snapshot = PrSnapshot::from_status(identifier, &status);
    if snapshot.is_empty() {
        log::info!("Status response without pull request data");
        return StatusAction::NoPullRequest;
    }

    log::info!(
        "Pull request {:?} is {} with {} checks",
        snapshot.title,
        snapshot.merge_readiness,
        snapshot.checks.len()
    );
    StatusAction::Received(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_client::{MergeStateStatus, PullRequestStatus, StatusCheckRollup};

    fn open_pr() -> PullRequestStatus {
        PullRequestStatus {
            title: "Add caching".to_string(),
            base_ref_name: "main".to_string(),
            head_ref_name: "cache".to_string(),
            merge_state_status: MergeStateStatus::Clean,
            status_check_rollup: vec![StatusCheckRollup {
                name: "build".to_string(),
                conclusion: "SUCCESS".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_error_becomes_failed() {
        let result = Err(anyhow::anyhow!("boom").context("Failed to query pull request status"));
        assert_eq!(
            classify_status("", result),
            StatusAction::Failed("Failed to query pull request status: boom".to_string())
        );
    }

    #[test]
    fn test_missing_pull_request() {
        let response = PrStatusResponse {
            current_branch: None,
        };
        assert_eq!(classify_status("", Ok(response)), StatusAction::NoPullRequest);
    }

    #[test]
    fn test_empty_pull_request_data() {
        let response = PrStatusResponse {
            current_branch: Some(PullRequestStatus::default()),
        };
        assert_eq!(classify_status("", Ok(response)), StatusAction::NoPullRequest);
    }

    #[test]
    fn test_closed_pull_request() {
        let mut pr = open_pr();
        pr.closed = true;
        let response = PrStatusResponse {
            current_branch: Some(pr),
        };
        assert_eq!(classify_status("", Ok(response)), StatusAction::Closed);
    }

    #[test]
    fn test_open_pull_request_is_received() {
        let response = PrStatusResponse {
            current_branch: Some(open_pr()),
        };
        match classify_status("42", Ok(response)) {
            StatusAction::Received(snapshot) => {
                assert_eq!(snapshot.identifier, "42");
                assert_eq!(snapshot.title, "Add caching");
                assert_eq!(snapshot.merge_readiness, MergeStateStatus::Clean);
                assert_eq!(snapshot.checks.len(), 1);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
