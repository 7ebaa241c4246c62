//! Application State

use dev_cli_config::AppConfig;
use dev_cli_theme::Theme;
use gh_client::MergeStateStatus;

use super::{CheckListState, LayoutState, MergeSession, PrSnapshot, SessionExit, SpinnerState};

/// Which component owns the body of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionViewMode {
    /// Waiting for the status query
    CheckingStatus,
    /// Pull request cannot be merged, list its checks
    ShowingChecks,
    /// Pull request is clean, pick a merge strategy
    SelectingMergeStrategy,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pull request the session is about (empty = current checkout)
    pub identifier: String,
    pub view_mode: SessionViewMode,
    pub pull_request: Option<PrSnapshot>,
    /// Why the pull request cannot be merged (ShowingChecks only)
    pub readiness_title: String,
    pub check_list: CheckListState,
    pub merge: MergeSession,
    pub layout: LayoutState,
    pub spinner: SpinnerState,
    /// Set once the session is over
    pub exit: Option<SessionExit>,
    pub theme: Theme,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(identifier: impl Into<String>, config: AppConfig, theme: Theme) -> Self {
        Self {
            identifier: identifier.into(),
            view_mode: SessionViewMode::CheckingStatus,
            pull_request: None,
            readiness_title: String::new(),
            check_list: CheckListState::default(),
            merge: MergeSession::new(config.merge_countdown_ticks),
            layout: LayoutState::default(),
            spinner: SpinnerState::default(),
            exit: None,
            theme,
            config,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.exit.is_some()
    }

    /// Header line of the current pull request, empty while loading
    pub fn header_line(&self) -> String {
        self.pull_request
            .as_ref()
            .map(PrSnapshot::header_line)
            .unwrap_or_default()
    }

    pub fn is_draft(&self) -> bool {
        self.pull_request.as_ref().is_some_and(|pr| pr.is_draft)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("", AppConfig::default(), Theme::default())
    }
}

/// Title shown above the check list for a pull request that cannot be merged
pub fn readiness_title(status: &MergeStateStatus) -> String {
    match status {
        MergeStateStatus::Unstable => "Some checks were unsuccessful, cannot merge".to_string(),
        MergeStateStatus::Blocked => "Merging is blocked".to_string(),
        MergeStateStatus::Dirty => "Merge conflicts must be resolved".to_string(),
        MergeStateStatus::Behind => "Head branch is out of date".to_string(),
        MergeStateStatus::Draft => "Pull request is still a draft".to_string(),
        other => format!("Unable to merge, unhandled status: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_titles() {
        assert_eq!(
            readiness_title(&MergeStateStatus::Unstable),
            "Some checks were unsuccessful, cannot merge"
        );
        assert_eq!(
            readiness_title(&MergeStateStatus::HasHooks),
            "Unable to merge, unhandled status: HAS_HOOKS"
        );
        assert_eq!(
            readiness_title(&MergeStateStatus::from("MERGE_QUEUED")),
            "Unable to merge, unhandled status: MERGE_QUEUED"
        );
    }

    #[test]
    fn test_new_state_is_checking_status() {
        let state = AppState::default();
        assert_eq!(state.view_mode, SessionViewMode::CheckingStatus);
        assert!(!state.is_terminated());
        assert_eq!(state.header_line(), "");
        assert_eq!(state.merge.countdown_ticks, 2);
    }
}
