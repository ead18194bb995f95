//! Changelog discovery
//!
//! There is no index of where projects keep release notes, so a fixed list
//! of likely GitHub locations is checked in priority order. The first one
//! that does not answer 404 wins; if none do, the repository itself is
//! reported.

mod probe;

pub use probe::{HttpProbe, UrlProbe, DEFAULT_TIMEOUT};

use crate::error::ProbeError;
use crate::update::previous_breaking_version;
use tracing::{debug, info};

/// Candidate changelog URLs for `repo`, most specific first
pub fn changelog_candidates(repo: &str, latest: &str) -> Vec<String> {
    let breaking = previous_breaking_version(latest);
    vec![
        format!("{}/releases/v{}", repo, breaking),
        format!("{}/blob/master/CHANGELOG.md", repo),
        format!("{}/blob/master/HISTORY.md", repo),
        format!("{}/releases/{}", repo, breaking),
        format!("{}/releases/v{}", repo, latest),
        format!("{}/releases/v{}", repo, breaking),
    ]
}

/// Probe the candidates one at a time and return the first that exists
///
/// Falls back to `repo` when every candidate answers 404.
pub async fn find_changelog<P>(probe: &P, repo: &str, latest: &str) -> Result<String, ProbeError>
where
    P: UrlProbe + ?Sized,
{
    for url in changelog_candidates(repo, latest) {
        if probe.exists(&url).await? {
            info!(%url, "found changelog");
            return Ok(url);
        }
        debug!(%url, "candidate not found");
    }

    debug!(repo, "no candidate found, using repository URL");
    Ok(repo.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Probe answering from a fixed set of existing URLs and recording calls
    struct MockProbe {
        existing: HashSet<String>,
        fail_on: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl MockProbe {
        fn new(existing: &[&str]) -> Self {
            Self {
                existing: existing.iter().map(|s| s.to_string()).collect(),
                fail_on: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, url: &str) -> Self {
            self.fail_on = Some(url.to_string());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UrlProbe for MockProbe {
        async fn exists(&self, url: &str) -> Result<bool, ProbeError> {
            self.calls.lock().unwrap().push(url.to_string());
            if self.fail_on.as_deref() == Some(url) {
                return Err(ProbeError::request(url, "connection reset"));
            }
            Ok(self.existing.contains(url))
        }
    }

    const REPO: &str = "https://github.com/x/foo";

    #[test]
    fn test_candidates_stable_version() {
        assert_eq!(
            changelog_candidates(REPO, "2.5.1"),
            vec![
                "https://github.com/x/foo/releases/v2.0.0",
                "https://github.com/x/foo/blob/master/CHANGELOG.md",
                "https://github.com/x/foo/blob/master/HISTORY.md",
                "https://github.com/x/foo/releases/2.0.0",
                "https://github.com/x/foo/releases/v2.5.1",
                "https://github.com/x/foo/releases/v2.0.0",
            ]
        );
    }

    #[test]
    fn test_candidates_zero_major_use_exact_version() {
        let candidates = changelog_candidates(REPO, "0.4.2");
        assert_eq!(candidates[0], "https://github.com/x/foo/releases/v0.4.2");
        assert_eq!(candidates[3], "https://github.com/x/foo/releases/0.4.2");
    }

    #[tokio::test]
    async fn test_first_existing_candidate_wins() {
        let probe = MockProbe::new(&[
            "https://github.com/x/foo/blob/master/HISTORY.md",
            "https://github.com/x/foo/blob/master/CHANGELOG.md",
        ]);
        let url = find_changelog(&probe, REPO, "2.0.0").await.unwrap();
        assert_eq!(url, "https://github.com/x/foo/blob/master/CHANGELOG.md");
        assert_eq!(probe.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_release_page_is_preferred() {
        let probe = MockProbe::new(&[
            "https://github.com/x/foo/releases/v3.0.0",
            "https://github.com/x/foo/blob/master/CHANGELOG.md",
        ]);
        let url = find_changelog(&probe, REPO, "3.2.0").await.unwrap();
        assert_eq!(url, "https://github.com/x/foo/releases/v3.0.0");
        assert_eq!(probe.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_falls_back_to_repository() {
        let probe = MockProbe::new(&[]);
        let url = find_changelog(&probe, REPO, "2.0.0").await.unwrap();
        assert_eq!(url, REPO);
        assert_eq!(probe.calls(), changelog_candidates(REPO, "2.0.0"));
    }

    #[tokio::test]
    async fn test_probe_error_stops_search() {
        let probe =
            MockProbe::new(&[]).failing_on("https://github.com/x/foo/blob/master/HISTORY.md");
        let err = find_changelog(&probe, REPO, "2.0.0").await.unwrap_err();
        assert!(matches!(err, ProbeError::Request { .. }));
        assert_eq!(probe.calls().len(), 3);
    }
}
