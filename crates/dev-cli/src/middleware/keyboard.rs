//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C works in every view. It cancels a running countdown and quits
//! otherwise, also while the merge call is in flight. Only the short
//! pause after a cancel ignores it.
//!
//! ## Layer 2: Capabilities
//! Navigation and activation keys are only mapped when the active view
//! declares the matching capability.
//!
//! ## Layer 3: Gating
//! The resulting action is dispatched only if the active view accepts it.

use crate::actions::{Action, ContextAction, GlobalAction, MergeAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, MergePhase, SessionViewMode};
use crate::views::active_view;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = active_view(state);

        // LAYER 1: Priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            let action = interrupt_action(state);
            log::debug!("Layer 1: Ctrl+C - dispatching {:?}", action);
            if action != Action::None {
                dispatcher.dispatch(action);
            }
            return false;
        }

        // LAYER 2: Capability-based mapping
        let Some(action) = map_key(key, view.capabilities(state)) else {
            log::debug!("Unhandled key {:?} in view {:?}", key.code, view.view_id());
            return false;
        };

        // LAYER 3: Gating
        if view.accepts_action(&action) {
            dispatcher.dispatch(action);
        } else {
            log::debug!(
                "Layer 3: {:?} rejected by view {:?}",
                action,
                view.view_id()
            );
        }

        // Raw keys are always consumed
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        // All other actions pass through
        true
    }
}

/// What Ctrl+C means right now
fn interrupt_action(state: &AppState) -> Action {
    if state.view_mode != SessionViewMode::SelectingMergeStrategy {
        return Action::Global(GlobalAction::Quit);
    }
    match state.merge.phase {
        MergePhase::Counting => Action::Merge(MergeAction::Cancel),
        MergePhase::Cancelling => Action::None,
        MergePhase::Selecting | MergePhase::Merging | MergePhase::Merged => {
            Action::Global(GlobalAction::Quit)
        }
    }
}

fn map_key(key: KeyEvent, capabilities: PanelCapabilities) -> Option<Action> {
    let navigate = |nav| Some(Action::Navigate(nav));

    match key.code {
        KeyCode::Down if capabilities.supports_item_navigation() => {
            navigate(NavigationAction::Next)
        }
        KeyCode::Up if capabilities.supports_item_navigation() => {
            navigate(NavigationAction::Previous)
        }
        KeyCode::Char('j') if capabilities.supports_vim_navigation() => {
            navigate(NavigationAction::Next)
        }
        KeyCode::Char('k') if capabilities.supports_vim_navigation() => {
            navigate(NavigationAction::Previous)
        }
        KeyCode::Home if capabilities.supports_vertical_jumps() => {
            navigate(NavigationAction::ToTop)
        }
        KeyCode::End if capabilities.supports_vertical_jumps() => {
            navigate(NavigationAction::ToBottom)
        }
        KeyCode::Char('g')
            if capabilities.supports_vertical_jumps() && capabilities.supports_vim_navigation() =>
        {
            navigate(NavigationAction::ToTop)
        }
        KeyCode::Char('G')
            if capabilities.supports_vertical_jumps() && capabilities.supports_vim_navigation() =>
        {
            navigate(NavigationAction::ToBottom)
        }
        KeyCode::Enter | KeyCode::Char(' ') if capabilities.supports_item_activation() => {
            Some(Action::ViewContext(ContextAction::Confirm))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::ViewContext(ContextAction::Back)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CheckListAction;
    use crate::middleware::navigation::NavigationMiddleware;
    use crate::state::SessionExit;
    use gh_client::MergeMethod;
    use crate::store::Store;

    fn key(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )))
    }

    fn ctrl_c() -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
    }

    /// Records every action that reaches the reducer
    struct Recorder(std::rc::Rc<std::cell::RefCell<Vec<Action>>>);

    impl Middleware for Recorder {
        fn handle(&mut self, action: &Action, _: &AppState, _: &Dispatcher) -> bool {
            self.0.borrow_mut().push(action.clone());
            true
        }
    }

    fn store_with(state: AppState) -> (Store, std::rc::Rc<std::cell::RefCell<Vec<Action>>>) {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut store = Store::new(state);
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store.add_middleware(Box::new(NavigationMiddleware::new()));
        store.add_middleware(Box::new(Recorder(seen.clone())));
        (store, seen)
    }

    #[test]
    fn test_map_key_respects_capabilities() {
        let none = PanelCapabilities::empty();
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down), none), None);
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q')), none),
            Some(Action::ViewContext(ContextAction::Back))
        );

        let list = PanelCapabilities::ITEM_NAVIGATION
            | PanelCapabilities::VIM_NAVIGATION_BINDINGS
            | PanelCapabilities::SCROLL_VERTICAL
            | PanelCapabilities::ITEM_ACTIVATION;
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('G')), list),
            Some(Action::Navigate(NavigationAction::ToBottom))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' ')), list),
            Some(Action::ViewContext(ContextAction::Confirm))
        );

        let buttons = PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS;
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('g')), buttons), None);
    }

    #[test]
    fn test_keys_reach_only_the_active_component() {
        let mut state = AppState::default();
        state.view_mode = SessionViewMode::ShowingChecks;
        let (mut store, seen) = store_with(state);

        store.dispatch(key(KeyCode::Char('j')));
        store.dispatch(key(KeyCode::Enter));

        let seen = seen.borrow();
        assert!(seen.contains(&Action::Checks(CheckListAction::NavigateNext)));
        assert!(seen.contains(&Action::Checks(CheckListAction::OpenSelected)));
        assert!(!seen.iter().any(|a| matches!(a, Action::Merge(_))));
    }

    #[test]
    fn test_merge_keys_while_selecting() {
        let mut state = AppState::default();
        state.view_mode = SessionViewMode::SelectingMergeStrategy;
        let (mut store, seen) = store_with(state);

        store.dispatch(key(KeyCode::Char('k')));
        store.dispatch(key(KeyCode::Char('q')));

        let seen = seen.borrow();
        assert!(seen.contains(&Action::Merge(MergeAction::FocusPrevious)));
        assert!(seen.contains(&Action::Merge(MergeAction::Quit)));
        assert!(!seen.iter().any(|a| matches!(a, Action::Checks(_))));
    }

    #[test]
    fn test_ctrl_c_routing() {
        let mut state = AppState::default();
        assert_eq!(interrupt_action(&state), Action::Global(GlobalAction::Quit));

        state.view_mode = SessionViewMode::SelectingMergeStrategy;
        assert_eq!(interrupt_action(&state), Action::Global(GlobalAction::Quit));

        state.merge.confirm();
        assert_eq!(interrupt_action(&state), Action::Merge(MergeAction::Cancel));

        let mut cancelling = state.clone();
        cancelling.merge.cancel();
        assert_eq!(interrupt_action(&cancelling), Action::None);

        state.merge.countdown_ticks = 0;
        state.merge.start_merge();
        assert_eq!(interrupt_action(&state), Action::Global(GlobalAction::Quit));
    }

    #[test]
    fn test_ctrl_c_leaves_a_hanging_merge() {
        let mut state = AppState::default();
        state.view_mode = SessionViewMode::SelectingMergeStrategy;
        state.merge.confirm();
        state.merge.countdown_ticks = 0;
        state.merge.start_merge();
        let (mut store, seen) = store_with(state);

        store.dispatch(ctrl_c());

        assert!(seen
            .borrow()
            .contains(&Action::Global(GlobalAction::Quit)));
        assert_eq!(
            store.state().exit,
            Some(SessionExit::MergeDetached(MergeMethod::Squash))
        );
    }
}
