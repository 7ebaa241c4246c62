//! Git branch helpers for `dev pr create`

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::sync::OnceLock;
use tokio::process::Command;

/// Suggest a pull request title from a ticket branch name
///
/// `ABC-123-some-description` becomes `ABC-123: some description`. The
/// ticket key may follow a prefix (`feature-ABC-123-...`) and is always
/// upper-cased. Branches without a ticket key and a description give an
/// empty string.
pub fn title_from_branch(branch: &str) -> String {
    static TICKET_BRANCH: OnceLock<Regex> = OnceLock::new();

    let re = TICKET_BRANCH.get_or_init(|| {
        // Ticket key at the start or right after a dash, then the description
        Regex::new(r"(?:^|-)([A-Za-z]+-\d+)-(.+)$").unwrap()
    });

    let Some(captures) = re.captures(branch) else {
        return String::new();
    };

    let ticket = captures[1].to_uppercase();
    let description = captures[2].replace('-', " ");
    format!("{}: {}", ticket, description)
}

/// Name of the branch checked out in the current directory
pub async fn current_branch() -> Result<String> {
    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .output()
        .await
        .context("Failed to run git")?;

    if !output.status.success() {
        bail!(
            "not a git repository: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_branch() {
        let cases = [
            ("ABC-123-some-description", "ABC-123: some description"),
            ("prefix-ABC-123-some-description", "ABC-123: some description"),
            ("ABC-123", ""),
            ("invalid-branch", ""),
            ("ABC-123-some", "ABC-123: some"),
            ("abc-123-some", "ABC-123: some"),
        ];

        for (branch, expected) in cases {
            assert_eq!(title_from_branch(branch), expected, "branch {:?}", branch);
        }
    }

    #[test]
    fn test_title_from_detached_head() {
        assert_eq!(title_from_branch(""), "");
    }
}
