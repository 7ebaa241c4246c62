//! Merge Middleware
//!
//! Starts the merge once the countdown reaches zero and runs `gh pr merge`
//! in the background. The merge call is made at most once per session: a
//! `Start` is only acted upon while the countdown is due, and the reducer
//! leaves that state as soon as the `Start` is reduced.

use crate::actions::{Action, MergeAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_client::GitHubClient;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Middleware for the merge call
pub struct MergeMiddleware {
    runtime: Handle,
    client: Arc<dyn GitHubClient>,
}

impl MergeMiddleware {
    pub fn new(runtime: Handle, client: Arc<dyn GitHubClient>) -> Self {
        Self { runtime, client }
    }
}

impl Middleware for MergeMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // The last tick of the current countdown triggers the merge
            Action::Merge(MergeAction::CountdownTick { generation })
                if state.merge.accepts_tick(*generation) && state.merge.is_due() =>
            {
                log::info!("MergeMiddleware: countdown finished, starting merge");
                dispatcher.dispatch(Action::Merge(MergeAction::Start));
                true
            }

            Action::Merge(MergeAction::Start) => {
                if !state.merge.is_due() {
                    log::debug!(
                        "MergeMiddleware: ignoring start in phase {:?}",
                        state.merge.phase
                    );
                    return true;
                }

                let strategy = state.merge.strategy();
                let identifier = state.identifier.clone();
                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();

                log::info!("MergeMiddleware: merging with strategy {}", strategy);
                self.runtime.spawn(async move {
                    match client.merge_pull_request(&identifier, strategy).await {
                        Ok(()) => {
                            log::info!("Merge with strategy {} succeeded", strategy);
                            dispatcher.dispatch(Action::Merge(MergeAction::Completed));
                        }
                        Err(e) => {
                            log::error!("Merge with strategy {} failed: {:#}", strategy, e);
                            dispatcher.dispatch(Action::Merge(MergeAction::Failed(format!(
                                "{:#}",
                                e
                            ))));
                        }
                    }
                });
                true
            }

            _ => true,
        }
    }
}
