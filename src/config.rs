//! Run configuration resolved from CLI arguments and the environment

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::output::OutputConfig;
use crate::update::DependencyFilter;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

/// Package manager program used when none is configured
#[cfg(not(windows))]
pub const DEFAULT_NPM_PROGRAM: &str = "npm";
#[cfg(windows)]
pub const DEFAULT_NPM_PROGRAM: &str = "npm.cmd";

/// Validated settings for a scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory containing package.json
    pub path: PathBuf,
    /// Program run for registry queries
    pub npm_program: String,
    /// Timeout for each probe request
    pub probe_timeout: Duration,
    /// Packages to skip
    pub exclude: Vec<String>,
    /// If non-empty, only these packages are checked
    pub only: Vec<String>,
    /// Verbose output
    pub verbose: bool,
    /// Quiet output
    pub quiet: bool,
    /// JSON output
    pub json: bool,
}

impl ScanConfig {
    /// Build and validate configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.quiet && args.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        if args.timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !args.path.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: args.path.clone(),
                message: "not a directory".to_string(),
            });
        }

        Ok(Self {
            path: args.path.clone(),
            npm_program: args
                .npm
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NPM_PROGRAM.to_string()),
            probe_timeout: Duration::from_secs(args.timeout),
            exclude: args.exclude.clone(),
            only: args.only.clone(),
            verbose: args.verbose,
            quiet: args.quiet,
            json: args.json,
        })
    }

    /// Dependency filter for this run
    pub fn filter(&self) -> DependencyFilter {
        DependencyFilter::new()
            .with_exclude(self.exclude.clone())
            .with_only(self.only.clone())
    }

    /// Output configuration for this run
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::from_cli(self.json, self.verbose, self.quiet);
        config.color = std::io::stdout().is_terminal();
        config
    }

    /// Whether the spinner should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json && std::io::stderr().is_terminal()
    }
}
