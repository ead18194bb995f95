//! Breaking-boundary classification
//!
//! Versions are compared textually on their `.`-separated components.
//! Packages below 1.0.0 may break on any release, so every change to a
//! `0.x` version counts as breaking.

/// Returns the major component of a version string
fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

/// The release that opened the breaking range `version` belongs to
///
/// `0.x` versions are their own boundary; otherwise this is `<major>.0.0`.
pub fn previous_breaking_version(version: &str) -> String {
    match major(version) {
        "0" => version.to_string(),
        major => format!("{}.0.0", major),
    }
}

/// Whether moving from `current` to `latest` crosses a breaking boundary
pub fn is_major_upgrade(current: &str, latest: &str) -> bool {
    if major(current) == "0" {
        return current != latest;
    }
    major(current) != major(latest)
}
