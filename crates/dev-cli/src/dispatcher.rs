//! Dispatcher for middleware and background tasks
//!
//! Actions dispatched here are queued on the store's channel and re-enter the
//! middleware chain from the beginning, in the order they were sent. Timers
//! and finished `gh` calls use a cloned dispatcher to report back into the
//! event loop.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
