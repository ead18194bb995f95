//! Dependency filter configuration
//!
//! Names beginning with `http` (tarball or git URLs used as keys) and
//! `@types` packages are never checked. `--exclude` and `--only` narrow the
//! remaining set further.

use crate::domain::Dependency;

/// Name prefixes that are never looked up in the registry
const IGNORED_PREFIXES: &[&str] = &["http", "@types"];

/// Filter applied to dependencies before the registry is queried
#[derive(Debug, Clone, Default)]
pub struct DependencyFilter {
    /// Packages to exclude
    pub exclude: Vec<String>,
    /// If non-empty, only these packages are checked
    pub only: Vec<String>,
}

impl DependencyFilter {
    /// Create a filter that only applies the built-in exclusions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set packages to exclude
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set packages to include (only list)
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }

    /// Check if a package name should be processed
    pub fn should_process(&self, name: &str) -> bool {
        if IGNORED_PREFIXES.iter().any(|p| name.starts_with(p)) {
            return false;
        }
        if !self.only.is_empty() {
            return self.only.iter().any(|p| p == name);
        }
        !self.exclude.iter().any(|p| p == name)
    }

    /// Keep only the dependencies that should be processed, in order
    pub fn apply(&self, dependencies: Vec<Dependency>) -> Vec<Dependency> {
        dependencies
            .into_iter()
            .filter(|d| self.should_process(&d.name))
            .collect()
    }
}
