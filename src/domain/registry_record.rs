//! Registry lookup result

/// What the registry reports for a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRecord {
    /// Latest published version
    pub version: String,
    /// Declared source repository, possibly in a VCS form like `git+ssh://`
    pub repository_url: Option<String>,
}

impl RegistryRecord {
    /// Creates a record with a repository URL
    pub fn new(version: impl Into<String>, repository_url: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            repository_url: Some(repository_url.into()),
        }
    }

    /// Creates a record for a package that declares no repository
    pub fn without_repository(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            repository_url: None,
        }
    }
}
