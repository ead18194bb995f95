//! Update classification
//!
//! This module provides:
//! - The breaking-boundary rule applied to version strings
//! - Dependency filtering before any registry query

mod breaking;
mod filter;

pub use breaking::{is_major_upgrade, previous_breaking_version};
pub use filter::DependencyFilter;
