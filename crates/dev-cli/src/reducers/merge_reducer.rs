use crate::actions::{Action, MergeAction};
use crate::state::MergeSession;

/// Reducer for the merge strategy selector
///
/// Every transition is guarded by the session itself, so late or repeated
/// actions leave the state untouched.
pub fn reduce(mut state: MergeSession, action: &Action) -> MergeSession {
    let Action::Merge(action) = action else {
        return state;
    };

    let changed = match action {
        MergeAction::FocusNext => {
            state.focus_next();
            true
        }
        MergeAction::FocusPrevious => {
            state.focus_previous();
            true
        }
        MergeAction::Confirm => state.confirm(),
        MergeAction::CountdownTick { generation } => state.tick(*generation),
        MergeAction::Cancel => state.cancel(),
        MergeAction::CancelElapsed { generation } => state.finish_cancel(*generation),
        MergeAction::Start => state.start_merge(),
        MergeAction::Completed => state.mark_merged(),
        // Both end the session, see app_reducer
        MergeAction::Failed(_) | MergeAction::Quit => true,
    };

    if !changed {
        log::debug!("Merge: {:?} ignored in phase {:?}", action, state.phase);
    }

    state
}
