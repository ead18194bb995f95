//! Core domain models for get-changelogs
//!
//! This module contains the fundamental types used throughout the application:
//! - Declared dependencies and their version ranges
//! - Registry lookup results
//! - Per-dependency scan outcomes and the run summary

mod dependency;
mod outcome;
mod registry_record;
mod summary;
mod version_spec;

pub use dependency::Dependency;
pub use outcome::{ScanOutcome, SkipReason};
pub use registry_record::RegistryRecord;
pub use summary::ScanSummary;
pub use version_spec::VersionSpec;
