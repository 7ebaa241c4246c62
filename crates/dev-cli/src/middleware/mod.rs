use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod browser;
pub mod keyboard;
pub mod logging;
pub mod merge;
pub mod navigation;
pub mod status;
pub mod timer;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware performs side effects (spawning `gh`, arming timers, opening
/// the browser) and never changes state itself. Anything long running is
/// spawned on the tokio runtime and reports back through the dispatcher.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state, before this action is reduced
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
