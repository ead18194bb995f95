//! Manifest loading
//!
//! Reads `package.json` from the target directory and collects the
//! declared dependencies. A missing manifest is not an error; callers get
//! `None` and decide how to report it.

mod package_json;

pub use package_json::PackageJsonParser;

use crate::domain::Dependency;
use crate::error::ManifestError;
use std::path::Path;

/// Manifest filename looked up in the target directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// Load dependencies from `<dir>/package.json`
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_package_json(dir: &Path) -> Result<Option<Vec<Dependency>>, ManifestError> {
    let path = dir.join(MANIFEST_FILENAME);
    if !path.is_file() {
        return Ok(None);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;
    PackageJsonParser::new(&path).parse(&content).map(Some)
}
