use crate::actions::{Action, CheckListAction};
use crate::state::CheckListState;

/// Reducer for the status check list
pub fn reduce(mut state: CheckListState, action: &Action) -> CheckListState {
    if let Action::Checks(action) = action {
        match action {
            CheckListAction::NavigateNext => state.select_next(),
            CheckListAction::NavigatePrevious => state.select_previous(),
            CheckListAction::NavigateToTop => state.select_first(),
            CheckListAction::NavigateToBottom => state.select_last(),
            // Side effect only, handled by the browser middleware
            CheckListAction::OpenSelected => {}
        }
    }
    state
}
