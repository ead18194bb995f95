//! Per-dependency scan outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason why a dependency was skipped without a changelog lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "url", rename_all = "snake_case")]
pub enum SkipReason {
    /// The registry does not know the package
    NotInRegistry,
    /// The package metadata declares no repository
    NoRepository,
    /// The repository is hosted somewhere other than GitHub
    #[serde(rename = "not_on_github")]
    NotOnGitHub(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotInRegistry => write!(f, "not in the npm registry"),
            SkipReason::NoRepository => write!(f, "no repository"),
            SkipReason::NotOnGitHub(url) => write!(f, "not on github: {}", url),
        }
    }
}

/// Result of scanning a single dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The latest release crosses a breaking boundary
    Breaking {
        name: String,
        current: String,
        latest: String,
        changelog_url: String,
    },
    /// The latest release stays within the declared major version
    UpToDate {
        name: String,
        current: String,
        latest: String,
    },
    /// The dependency could not be checked
    Skipped { name: String, reason: SkipReason },
}

impl ScanOutcome {
    /// Creates a Breaking outcome
    pub fn breaking(
        name: impl Into<String>,
        current: impl Into<String>,
        latest: impl Into<String>,
        changelog_url: impl Into<String>,
    ) -> Self {
        ScanOutcome::Breaking {
            name: name.into(),
            current: current.into(),
            latest: latest.into(),
            changelog_url: changelog_url.into(),
        }
    }

    /// Creates an UpToDate outcome
    pub fn up_to_date(
        name: impl Into<String>,
        current: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        ScanOutcome::UpToDate {
            name: name.into(),
            current: current.into(),
            latest: latest.into(),
        }
    }

    /// Creates a Skipped outcome
    pub fn skipped(name: impl Into<String>, reason: SkipReason) -> Self {
        ScanOutcome::Skipped {
            name: name.into(),
            reason,
        }
    }

    /// Returns true if this outcome reports a breaking update
    pub fn is_breaking(&self) -> bool {
        matches!(self, ScanOutcome::Breaking { .. })
    }

    /// Returns true if this outcome is a skip
    pub fn is_skipped(&self) -> bool {
        matches!(self, ScanOutcome::Skipped { .. })
    }
}
