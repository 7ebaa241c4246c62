use crate::actions::{Action, GlobalAction};
use crate::state::SpinnerState;

/// Reducer for the ellipsis spinner
pub fn reduce(mut state: SpinnerState, action: &Action) -> SpinnerState {
    if let Action::Global(GlobalAction::Tick) = action {
        state.advance();
    }
    state
}
