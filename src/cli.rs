//! CLI argument parsing module for get-changelogs

use crate::changelog::DEFAULT_TIMEOUT;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Find changelogs for dependencies that have a breaking update available
#[derive(Parser, Debug, Clone)]
#[command(
    name = "get-changelogs",
    version,
    about = "Find changelogs for dependencies with breaking updates"
)]
pub struct CliArgs {
    /// Directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // General options
    /// Enable verbose output and debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only breaking updates are printed
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    // Package filters
    /// Skip specific packages (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Check only specific packages (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub only: Vec<String>,

    // External tools
    /// Package manager program used for registry queries
    #[arg(long, env = "GET_CHANGELOGS_NPM", value_name = "PROGRAM")]
    pub npm: Option<String>,

    /// Timeout in seconds for each changelog probe request
    #[arg(
        long,
        env = "GET_CHANGELOGS_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs()
    )]
    pub timeout: u64,
}
