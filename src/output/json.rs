//! JSON output formatter for machine processing
//!
//! Nothing is written per dependency; the whole run is emitted as one
//! document after the last outcome.

use crate::domain::{ScanOutcome, ScanSummary};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level; non-verbose output leaves out up-to-date packages
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Reported outcomes in manifest order
    outcomes: Vec<&'a ScanOutcome>,
    /// Summary statistics
    summary: JsonSummary,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    breaking: usize,
    up_to_date: usize,
    skipped: usize,
}

impl OutputFormatter for JsonFormatter {
    fn write_outcome(
        &self,
        _outcome: &ScanOutcome,
        _writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        Ok(())
    }

    fn write_summary(&self, summary: &ScanSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let outcomes = summary
            .outcomes
            .iter()
            .filter(|o| {
                self.verbosity == Verbosity::Verbose || !matches!(o, ScanOutcome::UpToDate { .. })
            })
            .collect();

        let output = JsonOutput {
            outcomes,
            summary: JsonSummary {
                breaking: summary.breaking_count(),
                up_to_date: summary.up_to_date_count(),
                skipped: summary.skipped_count(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SkipReason;
    use serde_json::Value;

    fn sample_summary() -> ScanSummary {
        let mut summary = ScanSummary::new();
        summary.add(ScanOutcome::breaking(
            "foo",
            "1.0.0",
            "2.0.0",
            "https://github.com/x/foo/releases/v2.0.0",
        ));
        summary.add(ScanOutcome::up_to_date("bar", "1.0.0", "1.2.0"));
        summary.add(ScanOutcome::skipped("baz", SkipReason::NotInRegistry));
        summary
    }

    fn render(verbosity: Verbosity) -> Value {
        let mut buf = Vec::new();
        JsonFormatter::new(verbosity)
            .write_summary(&sample_summary(), &mut buf)
            .unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_write_outcome_is_silent() {
        let mut buf = Vec::new();
        JsonFormatter::new(Verbosity::Normal)
            .write_outcome(&ScanOutcome::up_to_date("a", "1.0.0", "1.0.1"), &mut buf)
            .unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let json = render(Verbosity::Normal);
        assert_eq!(json["summary"]["breaking"], 1);
        assert_eq!(json["summary"]["up_to_date"], 1);
        assert_eq!(json["summary"]["skipped"], 1);
    }

    #[test]
    fn test_up_to_date_hidden_unless_verbose() {
        let json = render(Verbosity::Normal);
        let outcomes = json["outcomes"].as_array().unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0]["status"], "breaking");
        assert_eq!(outcomes[1]["status"], "skipped");

        let json = render(Verbosity::Verbose);
        assert_eq!(json["outcomes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_breaking_fields() {
        let json = render(Verbosity::Normal);
        let breaking = &json["outcomes"][0];
        assert_eq!(breaking["name"], "foo");
        assert_eq!(breaking["current"], "1.0.0");
        assert_eq!(breaking["latest"], "2.0.0");
        assert_eq!(
            breaking["changelog_url"],
            "https://github.com/x/foo/releases/v2.0.0"
        );
    }
}
