//! Browser utilities
//!
//! Functions for opening URLs in the system's default browser.

use anyhow::{bail, Result};

/// Program and leading arguments that open a URL on the given platform
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `rundll32 url.dll,FileProtocolHandler`
pub fn opener_for(os: &str) -> Result<(&'static str, &'static [&'static str])> {
    match os {
        "macos" => Ok(("open", &[])),
        "linux" => Ok(("xdg-open", &[])),
        "windows" => Ok(("rundll32", &["url.dll,FileProtocolHandler"])),
        other => bail!("unsupported platform: {}", other),
    }
}

/// Open a URL in the system's default browser
pub async fn open_url(url: String) {
    let (program, args) = match opener_for(std::env::consts::OS) {
        Ok(opener) => opener,
        Err(e) => {
            log::error!("Failed to open {}: {}", url, e);
            return;
        }
    };

    let result = tokio::process::Command::new(program)
        .args(args)
        .arg(&url)
        .spawn();

    if let Err(e) = result {
        log::error!("Failed to open URL in browser: {}", e);
    }
}
