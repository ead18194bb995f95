//! Declared version ranges from package.json
//!
//! npm ranges carry an operator prefix (`^1.2.3`, `~1.2.3`, `>=1.2.3`, `v1.2.3`).
//! Everything before the first digit is treated as the prefix; the rest is
//! the version compared against the registry.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static LEADING_NON_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\d]+").unwrap());

/// A declared version range with its original string representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    /// The raw version string as it appears in the manifest
    pub raw: String,
    /// The version with any leading operator characters removed
    pub version: String,
    /// Leading operator characters (e.g., `^`, `~`, `>=`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl VersionSpec {
    /// Parse a declared range, splitting off everything before the first digit
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let prefix_len = LEADING_NON_DIGITS_RE
            .find(&raw)
            .map(|m| m.end())
            .unwrap_or(0);
        let prefix = (prefix_len > 0).then(|| raw[..prefix_len].to_string());
        let version = raw[prefix_len..].to_string();

        Self {
            raw,
            version,
            prefix,
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_caret() {
        let spec = VersionSpec::parse("^1.2.3");
        assert_eq!(spec.raw, "^1.2.3");
        assert_eq!(spec.version, "1.2.3");
        assert_eq!(spec.prefix.as_deref(), Some("^"));
    }

    #[test]
    fn test_parse_tilde() {
        let spec = VersionSpec::parse("~0.3.2");
        assert_eq!(spec.version, "0.3.2");
        assert_eq!(spec.prefix.as_deref(), Some("~"));
    }

    #[test]
    fn test_parse_comparison_operator() {
        let spec = VersionSpec::parse(">=2.0.0");
        assert_eq!(spec.version, "2.0.0");
        assert_eq!(spec.prefix.as_deref(), Some(">="));
    }

    #[test]
    fn test_parse_exact() {
        let spec = VersionSpec::parse("4.17.21");
        assert_eq!(spec.version, "4.17.21");
        assert!(spec.prefix.is_none());
    }

    #[test]
    fn test_parse_keeps_prerelease_suffix() {
        let spec = VersionSpec::parse("^14.0.0-canary.1");
        assert_eq!(spec.version, "14.0.0-canary.1");
    }

    #[test]
    fn test_parse_only_strips_leading_characters() {
        let spec = VersionSpec::parse(">=1.0.0 <2.0.0");
        assert_eq!(spec.version, "1.0.0 <2.0.0");
    }

    #[test]
    fn test_parse_tag_without_digits() {
        let spec = VersionSpec::parse("latest");
        assert_eq!(spec.version, "");
        assert_eq!(spec.prefix.as_deref(), Some("latest"));
    }

    #[test]
    fn test_display_uses_raw() {
        assert_eq!(format!("{}", VersionSpec::parse("^1.2.3")), "^1.2.3");
    }
}
