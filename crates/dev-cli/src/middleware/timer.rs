//! Timer Middleware
//!
//! Owns every delayed action of the merge sequence:
//! - countdown ticks, re-armed after each tick until the countdown is due
//! - the pause between cancelling and resetting the selector
//! - the pause between a successful merge and the end of the session
//!
//! Timers are plain sleeps on the runtime that dispatch one action when they
//! wake up. They are never aborted; countdown actions carry the generation
//! they were armed for and the merge state ignores outdated ones.

use crate::actions::{Action, MergeAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, MergePhase, SessionExit};
use std::time::Duration;
use tokio::runtime::Handle;

/// Middleware for the merge sequence timers
pub struct TimerMiddleware {
    runtime: Handle,
}

impl TimerMiddleware {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Dispatch `action` once `delay` has passed
    fn schedule(&self, delay: Duration, action: Action, dispatcher: &Dispatcher) {
        log::debug!("TimerMiddleware: {:?} in {:?}", action, delay);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(action);
        });
    }
}

impl Middleware for TimerMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let config = &state.config;

        match action {
            Action::Merge(MergeAction::Confirm) if state.merge.phase == MergePhase::Selecting => {
                let generation = state.merge.next_generation();
                self.schedule(
                    config.countdown_interval(),
                    Action::Merge(MergeAction::CountdownTick { generation }),
                    dispatcher,
                );
            }

            Action::Merge(MergeAction::CountdownTick { generation })
                if state.merge.accepts_tick(*generation) && state.merge.countdown_ticks > 0 =>
            {
                self.schedule(
                    config.countdown_interval(),
                    Action::Merge(MergeAction::CountdownTick {
                        generation: *generation,
                    }),
                    dispatcher,
                );
            }

            Action::Merge(MergeAction::Cancel) if state.merge.phase == MergePhase::Counting => {
                self.schedule(
                    config.cancel_delay(),
                    Action::Merge(MergeAction::CancelElapsed {
                        generation: state.merge.generation,
                    }),
                    dispatcher,
                );
            }

            Action::Merge(MergeAction::Completed) if state.merge.phase == MergePhase::Merging => {
                let exit = SessionExit::Merged(state.merge.strategy());
                self.schedule(
                    config.exit_delay(),
                    Action::Session(SessionAction::Exit(exit)),
                    dispatcher,
                );
            }

            _ => {}
        }

        // Timers never consume actions
        true
    }
}
