//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Personal developer CLI around the GitHub CLI
#[derive(Parser, Debug)]
#[command(name = "dev")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (skips the default lookup)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with pull requests
    Pr {
        #[command(subcommand)]
        command: PrCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrCommands {
    /// Show the status checks of a pull request and merge it once they pass
    Merge {
        /// Branch name, number or URL (defaults to the current branch)
        identifier: Option<String>,
    },

    /// Open a pull request for the current branch
    Create {
        /// Title (defaults to one derived from a `ABC-123-...` branch name)
        #[arg(long)]
        title: Option<String>,

        /// Description
        #[arg(long, default_value = "")]
        body: String,

        /// Branch to merge into (defaults to the repository default branch)
        #[arg(long)]
        base: Option<String>,

        /// Open as a draft
        #[arg(long)]
        draft: bool,
    },

    /// Open a pull request in the browser
    View {
        /// Branch name, number or URL (defaults to the current branch)
        identifier: Option<String>,
    },
}
