//! Navigation Translation Middleware
//!
//! Translates generic Navigate and ViewContext actions into component
//! actions using the active view. Only the active view is ever asked, so
//! input never reaches a component that is not on screen.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::active_view;

/// Middleware that translates generic actions via the active view
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = active_view(state);
        let translated = match action {
            Action::Navigate(nav) => view.translate_navigation(*nav),
            Action::ViewContext(context) => view.translate_context_action(*context, state),
            // Pass through all other actions
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!(
                    "NavigationMiddleware: Translating {:?} to {:?}",
                    action,
                    translated
                );
                dispatcher.dispatch(translated);
            }
            None => {
                log::debug!(
                    "{:?} not handled by active view {:?}",
                    action,
                    view.view_id()
                );
            }
        }

        // Generic actions never reach the reducer
        false
    }
}
