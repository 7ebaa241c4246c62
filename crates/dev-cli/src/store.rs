use crate::actions::{Action, MergeAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// Everything runs on the thread that owns the store: middleware, reducers and
/// rendering never overlap. Background work only ever sends actions.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action, then everything it caused
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.drain();
    }

    /// Process all queued actions in arrival order
    pub fn drain(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    /// Run one action through the middleware chain and the reducer
    fn process(&mut self, action: Action) {
        if self.state.is_terminated() {
            log::debug!("Session over, dropping {:?}", action);
            return;
        }

        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(self.state.clone(), &action);
        }
    }

    /// Block until the merge call in flight reports back
    ///
    /// Used after the session was left during the merge. The outcome is
    /// returned instead of reduced since the session is already over.
    pub fn await_merge_outcome(&self) -> Option<MergeAction> {
        while let Ok(action) = self.action_rx.recv() {
            match action {
                Action::Merge(outcome @ (MergeAction::Completed | MergeAction::Failed(_))) => {
                    return Some(outcome)
                }
                other => log::debug!("Session over, skipping {:?}", other),
            }
        }
        None
    }

    /// Block until `predicate` holds, processing actions as they arrive
    #[cfg(test)]
    pub fn wait_until(
        &mut self,
        timeout: std::time::Duration,
        predicate: impl Fn(&AppState) -> bool,
    ) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        loop {
            self.drain();
            if predicate(&self.state) {
                return true;
            }
            let now = std::time::Instant::now();
            if now >= deadline {
                return false;
            }
            if let Ok(action) = self.action_rx.recv_timeout(deadline - now) {
                self.process(action);
            }
        }
    }
}
