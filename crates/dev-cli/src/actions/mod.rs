//! Actions module
//!
//! Every event in a session is an `Action`. Actions are organized by:
//! - Generic actions (Navigate, ViewContext) that the active view translates
//! - Global actions that affect the whole session
//! - Component-specific actions already targeted at one reducer

// Shared action types
pub mod context_action;
pub mod global;
pub mod navigation;

// Component-specific action types
pub mod check_list;
pub mod merge;
pub mod session;
pub mod status;

pub use check_list::CheckListAction;
pub use context_action::ContextAction;
pub use global::GlobalAction;
pub use merge::MergeAction;
pub use navigation::NavigationAction;
pub use session::SessionAction;
pub use status::StatusAction;

/// Root action enum - tagged by component
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Session wide actions (keys, resize, ticks, quit)
    Global(GlobalAction),

    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    /// Pull request status poll and its outcome
    Status(StatusAction),
    /// Status check list
    Checks(CheckListAction),
    /// Merge strategy selector and merge sequence
    Merge(MergeAction),
    /// Session termination
    Session(SessionAction),

    /// No-op action
    None,
}

impl Action {
    /// Periodic actions that would flood the log
    pub fn is_noisy(&self) -> bool {
        matches!(self, Action::Global(GlobalAction::Tick) | Action::None)
    }
}
