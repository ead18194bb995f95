//! Registry interrogation
//!
//! This module provides:
//! - The `RegistryQuery` seam used by the scanner
//! - An adapter that shells out to `npm view`
//! - Repository URL normalization for the changelog probe

mod npm;
mod repository;

pub use npm::NpmCli;
pub use repository::{is_github, normalize_repository_url};

use crate::domain::RegistryRecord;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for looking up the latest published version of a package
#[async_trait]
pub trait RegistryQuery: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest version and repository URL for a package
    ///
    /// Returns `Ok(None)` when the registry does not know the package.
    async fn lookup(&self, package: &str) -> Result<Option<RegistryRecord>, RegistryError>;
}
