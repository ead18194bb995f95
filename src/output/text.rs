//! Text output formatter for human-readable display
//!
//! Lines are printed as each dependency finishes:
//! - `name: current -> latest changelog-url` for breaking updates
//! - a notice for each skipped dependency
//! - in verbose mode, dependencies without a breaking update and a final count

use crate::domain::{ScanOutcome, ScanSummary, SkipReason};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a skip notice
    fn skip_line(&self, name: &str, reason: &SkipReason) -> String {
        let name = if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        };
        match reason {
            SkipReason::NotInRegistry => {
                format!("skipping {} because it's not in NPM registry", name)
            }
            SkipReason::NoRepository => {
                format!("{} doesn't have a repo associated with the npm package", name)
            }
            SkipReason::NotOnGitHub(url) => {
                format!("{} is not on github, but checkout: {}", name, url)
            }
        }
    }

    /// Format a breaking-update line
    fn breaking_line(&self, name: &str, current: &str, latest: &str, url: &str) -> String {
        if self.color {
            format!(
                "{}: {} -> {} {}",
                name.bold(),
                current.dimmed(),
                latest.red().bold(),
                url.cyan().underline()
            )
        } else {
            format!("{}: {} -> {} {}", name, current, latest, url)
        }
    }

    /// Format a line for a dependency without a breaking update
    fn up_to_date_line(&self, name: &str, current: &str, latest: &str) -> String {
        let line = format!("{}: {} -> {} (no breaking change)", name, current, latest);
        if self.color {
            line.dimmed().to_string()
        } else {
            line
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn write_outcome(
        &self,
        outcome: &ScanOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        match outcome {
            ScanOutcome::Breaking {
                name,
                current,
                latest,
                changelog_url,
            } => writeln!(
                writer,
                "{}",
                self.breaking_line(name, current, latest, changelog_url)
            ),
            ScanOutcome::Skipped { name, reason } => {
                if self.verbosity == Verbosity::Quiet {
                    return Ok(());
                }
                writeln!(writer, "{}", self.skip_line(name, reason))
            }
            ScanOutcome::UpToDate {
                name,
                current,
                latest,
            } => {
                if self.verbosity != Verbosity::Verbose {
                    return Ok(());
                }
                writeln!(writer, "{}", self.up_to_date_line(name, current, latest))
            }
        }
    }

    fn write_summary(&self, summary: &ScanSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Verbose {
            return Ok(());
        }
        writeln!(writer)?;
        writeln!(
            writer,
            "Checked {} dependencies: {} breaking, {} without breaking changes, {} skipped",
            summary.outcomes.len(),
            summary.breaking_count(),
            summary.up_to_date_count(),
            summary.skipped_count()
        )
    }
}
