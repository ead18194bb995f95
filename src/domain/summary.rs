//! Summary of a scan run

use super::ScanOutcome;
use serde::Serialize;

/// Aggregated outcomes of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Outcomes in the order dependencies were processed
    pub outcomes: Vec<ScanOutcome>,
}

impl ScanSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outcome
    pub fn add(&mut self, outcome: ScanOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of dependencies with a breaking update
    pub fn breaking_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_breaking()).count()
    }

    /// Number of dependencies skipped
    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }

    /// Number of dependencies without a breaking update
    pub fn up_to_date_count(&self) -> usize {
        self.outcomes.len() - self.breaking_count() - self.skipped_count()
    }
}
