//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::{MergeMethod, PrStatusResponse};
use async_trait::async_trait;

/// GitHub accessor trait
///
/// Defines the small set of pull request operations the CLI needs.
/// Every call either succeeds or fails fast; there is no retry policy.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across background tasks through an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PrStatusResponse};
///
/// async fn status(client: &dyn GitHubClient) -> anyhow::Result<PrStatusResponse> {
///     // An empty identifier means "the pull request of the current checkout"
///     client.pr_status("").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Check that the user is authenticated against GitHub
    async fn auth_status(&self) -> anyhow::Result<()>;

    /// Open a pull request in the browser
    ///
    /// An empty `identifier` selects the pull request of the current branch.
    async fn view_pull_request(&self, identifier: &str) -> anyhow::Result<()>;

    /// Fetch the status of a pull request
    ///
    /// # Arguments
    ///
    /// * `identifier` - Branch name, number or URL. Empty infers the pull
    ///   request from the current checkout.
    ///
    /// # Returns
    ///
    /// The raw status response. `current_branch` is `None` when there is no
    /// pull request for the checkout.
    async fn pr_status(&self, identifier: &str) -> anyhow::Result<PrStatusResponse>;

    /// Open a pull request for the current branch
    ///
    /// An empty `base` targets the repository default branch. Returns the
    /// URL of the new pull request.
    async fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        base: &str,
        draft: bool,
    ) -> anyhow::Result<String>;

    /// Merge a pull request
    ///
    /// # Arguments
    ///
    /// * `identifier` - The same identifier the status was fetched with.
    ///   Empty merges the pull request of the current checkout.
    /// * `method` - How to merge (squash, merge commit, or rebase)
    async fn merge_pull_request(
        &self,
        identifier: &str,
        method: MergeMethod,
    ) -> anyhow::Result<()>;
}
