//! Dependency information structures

use super::VersionSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A package declared in package.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Declared version range
    pub version_spec: VersionSpec,
    /// Whether this came from devDependencies
    pub is_dev: bool,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, version_spec: VersionSpec, is_dev: bool) -> Self {
        Self {
            name: name.into(),
            version_spec,
            is_dev,
        }
    }

    /// Creates a new production dependency
    pub fn production(name: impl Into<String>, raw_version: &str) -> Self {
        Self::new(name, VersionSpec::parse(raw_version), false)
    }

    /// Creates a new development dependency
    pub fn development(name: impl Into<String>, raw_version: &str) -> Self {
        Self::new(name, VersionSpec::parse(raw_version), true)
    }

    /// Returns the declared version with operators stripped
    pub fn version(&self) -> &str {
        &self.version_spec.version
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev { " (dev)" } else { "" };
        write!(f, "{}@{}{}", self.name, self.version_spec, dev_marker)
    }
}
