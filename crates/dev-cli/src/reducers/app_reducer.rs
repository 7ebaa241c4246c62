use crate::actions::{Action, GlobalAction, MergeAction, SessionAction, StatusAction};
use crate::reducers::{check_list_reducer, merge_reducer, spinner_reducer};
use crate::state::{
    readiness_title, AppState, LayoutState, MergePhase, MergeSession, PrSnapshot, SessionExit,
    SessionViewMode,
};
use crate::views::status_checks_view::LIST_CHROME_HEIGHT;
use gh_client::MergeStateStatus;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            let exit = if state.merge.is_merged() {
                SessionExit::Merged(state.merge.strategy())
            } else if state.merge.phase == MergePhase::Merging {
                log::warn!("Leaving while the merge call is still running");
                SessionExit::MergeDetached(state.merge.strategy())
            } else {
                SessionExit::UserQuit
            };
            state.exit = Some(exit);
            return state;
        }
        Action::Global(GlobalAction::Resize(width, height)) => {
            state.layout =
                LayoutState::compute(*width, *height, &state.header_line(), state.is_draft());
            resize_check_list(&mut state);
        }
        Action::Status(status) if state.view_mode == SessionViewMode::CheckingStatus => {
            match status {
                StatusAction::Poll => {}
                StatusAction::Received(snapshot) => show_pull_request(&mut state, snapshot),
                StatusAction::Failed(reason) => {
                    state.exit = Some(SessionExit::StatusFailed(reason.clone()))
                }
                StatusAction::Closed => state.exit = Some(SessionExit::Closed),
                StatusAction::NoPullRequest => state.exit = Some(SessionExit::NoPullRequest),
            }
        }
        Action::Merge(MergeAction::Failed(reason)) => {
            state.exit = Some(SessionExit::MergeFailed(reason.clone()));
        }
        Action::Merge(MergeAction::Quit) if state.merge.phase == MergePhase::Selecting => {
            state.exit = Some(SessionExit::UserQuit);
        }
        Action::Session(SessionAction::Exit(exit)) => {
            state.exit = Some(exit.clone());
        }
        _ => {}
    }

    // Run sub-reducers for component-specific actions
    state.check_list = check_list_reducer::reduce(state.check_list, action);
    state.merge = merge_reducer::reduce(state.merge, action);
    state.spinner = spinner_reducer::reduce(state.spinner, action);

    state
}

/// Route a fresh status snapshot to the selector or the check list
fn show_pull_request(state: &mut AppState, snapshot: &PrSnapshot) {
    state.pull_request = Some(snapshot.clone());

    if snapshot.merge_readiness == MergeStateStatus::Clean {
        log::info!("Pull request is clean, offering merge strategies");
        state.view_mode = SessionViewMode::SelectingMergeStrategy;
        state.merge = MergeSession::new(state.config.merge_countdown_ticks);
    } else {
        log::info!(
            "Pull request cannot be merged ({}), showing checks",
            snapshot.merge_readiness
        );
        state.view_mode = SessionViewMode::ShowingChecks;
        state.readiness_title = readiness_title(&snapshot.merge_readiness);
        state.check_list.set_items(snapshot.checks.clone());
    }

    // The header changed, so does the body
    state.layout = LayoutState::compute(
        state.layout.width,
        state.layout.height,
        &state.header_line(),
        state.is_draft(),
    );
    resize_check_list(state);
}

fn resize_check_list(state: &mut AppState) {
    if state.view_mode == SessionViewMode::ShowingChecks {
        state.check_list.resize(
            state.layout.body_width,
            state.layout.body_height.saturating_sub(LIST_CHROME_HEIGHT),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CheckResult;
    use gh_client::MergeMethod;
    use pretty_assertions::assert_eq;

    fn snapshot(readiness: MergeStateStatus, checks: usize) -> PrSnapshot {
        PrSnapshot {
            identifier: String::new(),
            title: "Add caching".to_string(),
            base_branch: "main".to_string(),
            head_branch: "cache".to_string(),
            is_draft: false,
            is_closed: false,
            merge_readiness: readiness,
            checks: (0..checks)
                .map(|i| CheckResult {
                    name: format!("check-{}", i),
                    conclusion: "FAILURE".to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn received(readiness: MergeStateStatus, checks: usize) -> Action {
        Action::Status(StatusAction::Received(snapshot(readiness, checks)))
    }

    fn sized_state() -> AppState {
        reduce(
            AppState::default(),
            &Action::Global(GlobalAction::Resize(80, 24)),
        )
    }

    #[test]
    fn test_unstable_shows_checks() {
        let state = reduce(sized_state(), &received(MergeStateStatus::Unstable, 3));

        assert_eq!(state.view_mode, SessionViewMode::ShowingChecks);
        assert_eq!(
            state.readiness_title,
            "Some checks were unsuccessful, cannot merge"
        );
        assert_eq!(state.check_list.items.len(), 3);
        assert_eq!(state.check_list.width, 76);
        // 24 rows - 3 margins - 1 header line - 3 list chrome
        assert_eq!(state.check_list.height, 17);
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_clean_selects_strategy() {
        let mut initial = sized_state();
        initial.config.merge_countdown_ticks = 5;
        let state = reduce(initial, &received(MergeStateStatus::Clean, 1));

        assert_eq!(state.view_mode, SessionViewMode::SelectingMergeStrategy);
        assert_eq!(state.merge.phase, MergePhase::Selecting);
        assert_eq!(state.merge.focused_index, 0);
        assert_eq!(state.merge.countdown_ticks, 5);
        assert!(state.check_list.items.is_empty());
    }

    #[test]
    fn test_status_outcomes_end_session() {
        let cases = [
            (StatusAction::NoPullRequest, SessionExit::NoPullRequest),
            (StatusAction::Closed, SessionExit::Closed),
            (
                StatusAction::Failed("gh: exit status 1".to_string()),
                SessionExit::StatusFailed("gh: exit status 1".to_string()),
            ),
        ];

        for (status, exit) in cases {
            let state = reduce(AppState::default(), &Action::Status(status));
            assert_eq!(state.exit, Some(exit));
        }
    }

    #[test]
    fn test_late_status_is_ignored() {
        let state = reduce(sized_state(), &received(MergeStateStatus::Unstable, 2));
        let state = reduce(state, &Action::Status(StatusAction::NoPullRequest));
        assert_eq!(state.view_mode, SessionViewMode::ShowingChecks);
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_resize_reflows_check_list() {
        let state = reduce(sized_state(), &received(MergeStateStatus::Blocked, 2));
        let state = reduce(state, &Action::Global(GlobalAction::Resize(40, 12)));

        assert_eq!(state.layout.width, 40);
        assert_eq!(state.check_list.width, 36);
        // header wraps at 36 columns: "# Add caching  (cache -> main)" fits
        assert_eq!(state.check_list.height, 5);
    }

    #[test]
    fn test_quit_reports_merged_after_merge() {
        let mut state = reduce(sized_state(), &received(MergeStateStatus::Clean, 0));
        state.merge.confirm();
        state.merge.countdown_ticks = 0;
        state.merge.start_merge();
        state.merge.mark_merged();

        let state = reduce(state, &Action::Global(GlobalAction::Quit));
        assert_eq!(state.exit, Some(SessionExit::Merged(MergeMethod::Squash)));
    }

    #[test]
    fn test_quit_while_merging_detaches() {
        let mut state = reduce(sized_state(), &received(MergeStateStatus::Clean, 0));
        state.merge.focus_next();
        state.merge.confirm();
        state.merge.countdown_ticks = 0;
        state.merge.start_merge();

        let state = reduce(state, &Action::Global(GlobalAction::Quit));
        assert_eq!(state.exit, Some(SessionExit::MergeDetached(MergeMethod::Merge)));
        assert_eq!(state.exit.map(|exit| exit.exit_code()), Some(1));
    }

    #[test]
    fn test_selector_quit_and_merge_failure() {
        let selecting = reduce(sized_state(), &received(MergeStateStatus::Clean, 0));

        let quit = reduce(selecting.clone(), &Action::Merge(MergeAction::Quit));
        assert_eq!(quit.exit, Some(SessionExit::UserQuit));

        let failed = reduce(
            selecting,
            &Action::Merge(MergeAction::Failed("conflict".to_string())),
        );
        assert_eq!(
            failed.exit,
            Some(SessionExit::MergeFailed("conflict".to_string()))
        );
    }

    #[test]
    fn test_tick_advances_spinner() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Tick));
        assert_eq!(state.spinner.frame, 1);
    }
}
