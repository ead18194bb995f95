//! Repository URL normalization
//!
//! npm metadata records repositories in VCS forms such as
//! `git+https://github.com/x/y.git`, `git://github.com/x/y.git`,
//! `git+ssh://git@github.com/x/y.git` or `git@github.com:x/y.git`.
//! The changelog probe needs the browsable `https://` form.

use regex::Regex;
use std::sync::LazyLock;

/// scp-like `git@host:owner/repo`
static SCP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^git@([^:/]+):(.+)$").unwrap());

/// Whether a raw repository URL points at GitHub
pub fn is_github(raw: &str) -> bool {
    raw.contains("github")
}

/// Convert a repository URL from npm metadata into a browsable https URL
pub fn normalize_repository_url(raw: &str) -> String {
    let mut url = raw.trim();
    url = url.strip_prefix("git+").unwrap_or(url);
    if let Some((base, _fragment)) = url.split_once('#') {
        url = base;
    }
    url = url.trim_end_matches('/');
    url = url.strip_suffix(".git").unwrap_or(url);

    if let Some(rest) = url.strip_prefix("git://") {
        return format!("https://{}", rest);
    }
    if let Some(rest) = url.strip_prefix("ssh://git@") {
        return format!("https://{}", rest);
    }
    if let Some(caps) = SCP_RE.captures(url) {
        return format!("https://{}/{}", &caps[1], &caps[2]);
    }

    url.to_string()
}
