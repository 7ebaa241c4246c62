use crate::actions::{Action, ContextAction, NavigationAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, SessionViewMode};
use ratatui::{layout::Rect, Frame};

pub mod header;
pub mod loading_view;
pub mod merge_strategy_view;
pub mod status_checks_view;

pub use loading_view::LoadingView;
pub use merge_strategy_view::MergeStrategyView;
pub use status_checks_view::StatusChecksView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Loading,
    StatusChecks,
    MergeStrategy,
}

/// View trait - defines the interface that all views must implement
///
/// Views are stateless; everything they show comes from `AppState`. They also
/// own the translation of generic input (navigation, confirm/back) into their
/// component's actions.
pub trait View: std::fmt::Debug {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Translate a generic navigation action to this view's specific action.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None // Default: view doesn't handle navigation
    }

    /// Translate a context action (confirm, back) to this view's specific action.
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether an action produced by keyboard input may reach this view
    fn accepts_action(&self, action: &Action) -> bool;
}

/// The single view that owns the screen for the current view mode
pub fn active_view(state: &AppState) -> &'static dyn View {
    match state.view_mode {
        SessionViewMode::CheckingStatus => &LoadingView,
        SessionViewMode::ShowingChecks => &StatusChecksView,
        SessionViewMode::SelectingMergeStrategy => &MergeStrategyView,
    }
}

/// Render the entire application UI
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    active_view(state).render(state, area, f);
}
