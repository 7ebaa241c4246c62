//! Fake `gh` and a fully wired store for session level tests

use crate::middleware::{
    browser::BrowserMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    merge::MergeMiddleware, navigation::NavigationMiddleware, status::StatusMiddleware,
    timer::TimerMiddleware,
};
use crate::state::AppState;
use crate::store::Store;
use async_trait::async_trait;
use dev_cli_config::AppConfig;
use dev_cli_theme::Theme;
use gh_client::{
    GitHubClient, MergeMethod, MergeStateStatus, PrStatusResponse, PullRequestStatus,
    StatusCheckRollup,
};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;

/// In-memory GitHub client recording every merge call
#[derive(Debug, Default)]
pub struct MockClient {
    pub status: PrStatusResponse,
    pub merge_error: Option<String>,
    /// `(identifier, method)` of each merge call
    pub merges: Mutex<Vec<(String, MergeMethod)>>,
}

impl MockClient {
    pub fn with_pull_request(pr: PullRequestStatus) -> Self {
        Self {
            status: PrStatusResponse {
                current_branch: Some(pr),
            },
            ..Default::default()
        }
    }

    pub fn merges(&self) -> Vec<MergeMethod> {
        self.merge_calls()
            .into_iter()
            .map(|(_, method)| method)
            .collect()
    }

    pub fn merge_calls(&self) -> Vec<(String, MergeMethod)> {
        self.merges.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn auth_status(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn view_pull_request(&self, _identifier: &str) -> anyhow::Result<()> {
        Ok(())
    }

    async fn pr_status(&self, _identifier: &str) -> anyhow::Result<PrStatusResponse> {
        Ok(self.status.clone())
    }

    async fn create_pull_request(
        &self,
        _title: &str,
        _body: &str,
        _base: &str,
        _draft: bool,
    ) -> anyhow::Result<String> {
        Ok("https://github.com/acme/app/pull/1".to_string())
    }

    async fn merge_pull_request(
        &self,
        identifier: &str,
        method: MergeMethod,
    ) -> anyhow::Result<()> {
        self.merges
            .lock()
            .unwrap()
            .push((identifier.to_string(), method));
        match &self.merge_error {
            Some(reason) => Err(anyhow::anyhow!(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Open pull request with the given readiness and `(name, conclusion)` checks
pub fn pull_request(readiness: &str, checks: &[(&str, &str)]) -> PullRequestStatus {
    PullRequestStatus {
        title: "Add caching".to_string(),
        base_ref_name: "main".to_string(),
        head_ref_name: "cache".to_string(),
        merge_state_status: MergeStateStatus::from(readiness),
        status_check_rollup: checks
            .iter()
            .map(|(name, conclusion)| StatusCheckRollup {
                name: name.to_string(),
                conclusion: conclusion.to_string(),
                details_url: format!("https://ci.example.com/{}", name),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Config with short delays so sessions finish quickly
pub fn fast_config() -> AppConfig {
    AppConfig {
        countdown_interval_ms: 20,
        cancel_delay_ms: 20,
        exit_delay_ms: 20,
        ..Default::default()
    }
}

/// Store wired with the same middleware chain as the binary
pub fn session_store(runtime: Handle, client: Arc<MockClient>, config: AppConfig) -> Store {
    session_store_for("", runtime, client, config)
}

/// Same as [`session_store`] for an explicit pull request identifier
pub fn session_store_for(
    identifier: &str,
    runtime: Handle,
    client: Arc<MockClient>,
    config: AppConfig,
) -> Store {
    let client: Arc<dyn GitHubClient> = client;
    let mut store = Store::new(AppState::new(identifier, config, Theme::dark()));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(NavigationMiddleware::new()));
    store.add_middleware(Box::new(StatusMiddleware::new(
        runtime.clone(),
        Arc::clone(&client),
    )));
    store.add_middleware(Box::new(MergeMiddleware::new(runtime.clone(), client)));
    store.add_middleware(Box::new(TimerMiddleware::new(runtime.clone())));
    store.add_middleware(Box::new(BrowserMiddleware::new(runtime)));
    store
}
