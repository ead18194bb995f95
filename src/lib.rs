//! get-changelogs - find release notes for breaking dependency updates
//!
//! This library reads the dependencies declared in `package.json`, asks the
//! npm registry (through the `npm` CLI) for each package's latest version,
//! and for every update that crosses a breaking boundary guesses where the
//! project's changelog lives on GitHub.

pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod registry;
pub mod scanner;
pub mod update;
