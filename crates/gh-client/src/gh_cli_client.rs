//! `gh` command line implementation of `GitHubClient`
//!
//! Every call spawns the GitHub CLI and waits for it to finish. Output that
//! matters is captured and parsed, stdin is never connected so `gh` cannot
//! block on an interactive prompt.

use crate::client::GitHubClient;
use crate::error::GhCliError;
use crate::types::{MergeMethod, PrStatusResponse, PullRequestStatus};
use anyhow::Context;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// JSON fields requested from `gh pr status` and `gh pr view`
const PR_STATUS_FIELDS: &[&str] = &[
    "additions",
    "baseRefName",
    "changedFiles",
    "headRefName",
    "isDraft",
    "commits",
    "mergeStateStatus",
    "mergeable",
    "statusCheckRollup",
    "title",
    "updatedAt",
    "url",
    "closed",
];

/// GitHub client that shells out to the `gh` binary
#[derive(Debug, Clone)]
pub struct GhCliClient {
    program: String,
}

impl GhCliClient {
    /// Create a client for the given `gh` executable (name or path)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `gh` with the given arguments and return its stdout
    async fn run(&self, args: &[String]) -> Result<Vec<u8>, GhCliError> {
        let command = self.command_line(args);
        log::debug!("Running {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| GhCliError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::warn!("{} failed: {}", command, stderr);
            return Err(GhCliError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(output.stdout)
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for GhCliClient {
    fn default() -> Self {
        Self::new(crate::DEFAULT_GH_COMMAND)
    }
}

/// Arguments for the status query
///
/// `gh pr status` only knows the current checkout, an explicit identifier
/// is looked up with `gh pr view` instead.
pub fn pr_status_args(identifier: &str) -> Vec<String> {
    let json = format!("--json={}", PR_STATUS_FIELDS.join(","));
    if identifier.is_empty() {
        vec!["pr".to_string(), "status".to_string(), json]
    } else {
        vec![
            "pr".to_string(),
            "view".to_string(),
            identifier.to_string(),
            json,
        ]
    }
}

/// Arguments for `gh pr view --web`
pub fn view_args(identifier: &str) -> Vec<String> {
    let mut args = vec!["pr".to_string(), "view".to_string()];
    if !identifier.is_empty() {
        args.push(identifier.to_string());
    }
    args.push("--web".to_string());
    args
}

/// Arguments for `gh pr merge`
pub fn merge_args(identifier: &str, method: MergeMethod) -> Vec<String> {
    let mut args = vec!["pr".to_string(), "merge".to_string()];
    if !identifier.is_empty() {
        args.push(identifier.to_string());
    }
    args.push(method.gh_flag().to_string());
    args
}

/// Arguments for `gh pr create`
///
/// `--body` is always passed so `gh` never falls back to its editor prompt.
/// An empty `base` leaves the choice to the repository default branch.
pub fn create_args(title: &str, body: &str, base: &str, draft: bool) -> Vec<String> {
    let mut args: Vec<String> = ["pr", "create", "--title", title, "--body", body]
        .iter()
        .map(|arg| arg.to_string())
        .collect();
    if !base.is_empty() {
        args.push("--base".to_string());
        args.push(base.to_string());
    }
    if draft {
        args.push("--draft".to_string());
    }
    args
}

/// Decode the JSON printed by `gh pr status`
pub fn parse_pr_status(raw: &[u8]) -> Result<PrStatusResponse, GhCliError> {
    Ok(serde_json::from_slice(raw)?)
}

/// Decode the single pull request printed by `gh pr view --json`
pub fn parse_pr_view(raw: &[u8]) -> Result<PrStatusResponse, GhCliError> {
    let pull_request: PullRequestStatus = serde_json::from_slice(raw)?;
    Ok(PrStatusResponse {
        current_branch: Some(pull_request),
    })
}

#[async_trait]
impl GitHubClient for GhCliClient {
    async fn auth_status(&self) -> anyhow::Result<()> {
        self.run(&["auth".to_string(), "status".to_string()])
            .await?;
        Ok(())
    }

    async fn view_pull_request(&self, identifier: &str) -> anyhow::Result<()> {
        self.run(&view_args(identifier)).await?;
        Ok(())
    }

    async fn pr_status(&self, identifier: &str) -> anyhow::Result<PrStatusResponse> {
        let stdout = self
            .run(&pr_status_args(identifier))
            .await
            .context("Failed to query pull request status")?;
        let response = if identifier.is_empty() {
            parse_pr_status(&stdout)?
        } else {
            parse_pr_view(&stdout)?
        };
        log::debug!(
            "gh pr status returned {} checks",
            response
                .current_branch
                .as_ref()
                .map(|pr| pr.status_check_rollup.len())
                .unwrap_or(0)
        );
        Ok(response)
    }

    async fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        base: &str,
        draft: bool,
    ) -> anyhow::Result<String> {
        log::info!("Creating pull request {:?} against {:?}", title, base);
        let stdout = self
            .run(&create_args(title, body, base, draft))
            .await
            .context("Failed to create pull request")?;
        let url = String::from_utf8_lossy(&stdout).trim().to_string();
        log::info!("Created pull request {}", url);
        Ok(url)
    }

    async fn merge_pull_request(
        &self,
        identifier: &str,
        method: MergeMethod,
    ) -> anyhow::Result<()> {
        log::info!(
            "Merging pull request {:?} with strategy {}",
            identifier,
            method
        );
        self.run(&merge_args(identifier, method)).await?;
        Ok(())
    }
}
