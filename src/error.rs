//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or parsing package.json
//! - RegistryError: Issues running the npm metadata query
//! - ProbeError: Issues checking candidate changelog URLs
//! - ConfigError: Issues with CLI configuration
//!
//! Skip conditions (package not in the registry, no repository, repository
//! not on GitHub) are reported as outcomes, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A changelog probe failed for a repository
    #[error("failed for repo: {repo}")]
    Changelog {
        repo: String,
        #[source]
        source: ProbeError,
    },

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing results failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to package.json
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// Top-level JSON value is not an object
    #[error("expected a JSON object at the top level of {path}")]
    NotAnObject { path: PathBuf },
}

/// Errors related to the package manager metadata query
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The package manager program could not be started
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The query exited unsuccessfully for a reason other than "not found"
    #[error("'{command}' failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The query succeeded but its output could not be understood
    #[error("invalid output from npm for '{package}': {message}")]
    InvalidOutput { package: String, message: String },
}

/// Errors raised while probing candidate changelog URLs
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },

    /// The request did not produce a response
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The request timed out
    #[error("timeout while requesting {url}")]
    Timeout { url: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },

    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },

    /// A zero timeout would fail every probe
    #[error("invalid timeout: must be at least one second")]
    ZeroTimeout,
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new Spawn error
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        RegistryError::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        RegistryError::CommandFailed {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Creates a new InvalidOutput error
    pub fn invalid_output(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidOutput {
            package: package.into(),
            message: message.into(),
        }
    }
}

impl ProbeError {
    /// Creates a new Request error
    pub fn request(url: impl Into<String>, message: impl Into<String>) -> Self {
        ProbeError::Request {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(url: impl Into<String>) -> Self {
        ProbeError::Timeout { url: url.into() }
    }
}

impl AppError {
    /// Wraps a probe failure with the repository it happened for
    pub fn changelog(repo: impl Into<String>, source: ProbeError) -> Self {
        AppError::Changelog {
            repo: repo.into(),
            source,
        }
    }
}
