//! Scan orchestration
//!
//! This module provides:
//! - Workflow coordination: lookup → classify → normalize → probe → report
//! - Sequential processing, one dependency at a time
//! - Streaming output: each outcome is written as soon as it is known
//!
//! Skip conditions become outcomes. Any other failure stops the scan; lines
//! already written stay written.

use crate::changelog::{find_changelog, UrlProbe};
use crate::domain::{Dependency, ScanOutcome, ScanSummary, SkipReason};
use crate::error::AppError;
use crate::output::OutputFormatter;
use crate::progress::Progress;
use crate::registry::{is_github, normalize_repository_url, RegistryQuery};
use crate::update::is_major_upgrade;
use std::io::Write;
use tracing::debug;

/// Scanner for checking dependencies against the registry
pub struct Scanner<R, P> {
    /// Registry lookups
    registry: R,
    /// Changelog URL probe
    probe: P,
    /// Whether to show a spinner while scanning
    show_progress: bool,
}

impl<R, P> Scanner<R, P>
where
    R: RegistryQuery,
    P: UrlProbe,
{
    /// Create a new scanner
    pub fn new(registry: R, probe: P) -> Self {
        Self {
            registry,
            probe,
            show_progress: false,
        }
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Scan a single dependency
    pub async fn scan_dependency(&self, dep: &Dependency) -> Result<ScanOutcome, AppError> {
        let current = dep.version();

        let Some(record) = self.registry.lookup(&dep.name).await? else {
            debug!(package = %dep.name, registry = self.registry.registry_name(), "not found");
            return Ok(ScanOutcome::skipped(&dep.name, SkipReason::NotInRegistry));
        };

        if !is_major_upgrade(current, &record.version) {
            debug!(package = %dep.name, current, latest = %record.version, "no breaking change");
            return Ok(ScanOutcome::up_to_date(&dep.name, current, record.version));
        }

        let Some(raw_url) = record.repository_url else {
            return Ok(ScanOutcome::skipped(&dep.name, SkipReason::NoRepository));
        };

        if !is_github(&raw_url) {
            return Ok(ScanOutcome::skipped(
                &dep.name,
                SkipReason::NotOnGitHub(raw_url),
            ));
        }

        let repo = normalize_repository_url(&raw_url);
        let changelog_url = find_changelog(&self.probe, &repo, &record.version)
            .await
            .map_err(|e| AppError::changelog(&repo, e))?;

        Ok(ScanOutcome::breaking(
            &dep.name,
            current,
            record.version,
            changelog_url,
        ))
    }

    /// Scan dependencies in order, writing each outcome through `formatter`
    pub async fn run(
        &self,
        dependencies: &[Dependency],
        formatter: &dyn OutputFormatter,
        writer: &mut dyn Write,
    ) -> Result<ScanSummary, AppError> {
        let mut progress = Progress::new(self.show_progress);
        let mut summary = ScanSummary::new();

        progress.start(dependencies.len() as u64, "Checking dependencies");

        for dep in dependencies {
            progress.set_message(&format!("Checking {}", dep.name));

            let outcome = match self.scan_dependency(dep).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    progress.finish_and_clear();
                    return Err(e);
                }
            };

            if let ScanOutcome::Skipped { name, reason } = &outcome {
                debug!(package = %name, %reason, "skipped");
            }

            let written = progress.suspend(|| -> std::io::Result<()> {
                formatter.write_outcome(&outcome, writer)?;
                writer.flush()
            });
            if let Err(e) = written {
                progress.finish_and_clear();
                return Err(e.into());
            }
            summary.add(outcome);
            progress.inc();
        }
        progress.finish_and_clear();

        Ok(summary)
    }
}
