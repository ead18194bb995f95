//! package.json parser
//!
//! Handles:
//! - devDependencies
//! - dependencies
//!
//! devDependencies are listed first and key order inside each map is kept,
//! so output follows the order of the manifest.

use crate::domain::{Dependency, VersionSpec};
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Parser for package.json files
pub struct PackageJsonParser {
    /// Path used in error messages
    path: PathBuf,
}

impl PackageJsonParser {
    /// Create a parser reporting errors against `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse dependencies from package.json content
    pub fn parse(&self, content: &str) -> Result<Vec<Dependency>, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(&self.path, e.to_string()))?;

        let Some(root) = json.as_object() else {
            return Err(ManifestError::NotAnObject {
                path: self.path.clone(),
            });
        };

        let mut dependencies = Vec::new();

        if let Some(deps) = root.get("devDependencies").and_then(|v| v.as_object()) {
            parse_dependency_object(deps, true, &mut dependencies);
        }

        if let Some(deps) = root.get("dependencies").and_then(|v| v.as_object()) {
            parse_dependency_object(deps, false, &mut dependencies);
        }

        Ok(dependencies)
    }
}

impl Default for PackageJsonParser {
    fn default() -> Self {
        Self::new("package.json")
    }
}

fn parse_dependency_object(deps: &Map<String, Value>, is_dev: bool, output: &mut Vec<Dependency>) {
    for (name, version_value) in deps {
        if let Some(version_str) = version_value.as_str() {
            output.push(Dependency::new(
                name.clone(),
                VersionSpec::parse(version_str),
                is_dev,
            ));
        }
    }
}
