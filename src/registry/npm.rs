//! npm CLI adapter
//!
//! Runs `npm view --json <package> version repository.url` and reads the
//! structured output. npm collapses the output to a bare string when only
//! the version field exists, so both shapes are accepted.

use crate::domain::RegistryRecord;
use crate::error::RegistryError;
use crate::registry::RegistryQuery;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tokio::process::Command;
use tracing::debug;

/// Fields requested from `npm view`
const VIEW_FIELDS: [&str; 2] = ["version", "repository.url"];

/// npm's "package does not exist" diagnostics across versions
static NOT_FOUND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"not in (?:the npm|this) registry|\bE404\b").unwrap());

/// Adapter that queries the registry through the npm command line
#[derive(Debug, Clone)]
pub struct NpmCli {
    /// Program to run
    program: String,
    /// Arguments placed before `view`
    leading_args: Vec<String>,
}

/// `npm view --json` output
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ViewOutput {
    Fields {
        version: String,
        #[serde(rename = "repository.url")]
        repository_url: Option<String>,
    },
    VersionOnly(String),
}

impl NpmCli {
    /// Create an adapter running `program` (usually `npm`)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Insert arguments between the program and `view`
    ///
    /// Allows wrappers such as `sh fake-npm.sh` or `corepack npm`.
    pub fn with_leading_args(mut self, args: Vec<String>) -> Self {
        self.leading_args = args;
        self
    }

    /// Build the argument list for a package
    fn build_args(&self, package: &str) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.extend(["view", "--json", package].map(String::from));
        args.extend(VIEW_FIELDS.map(String::from));
        args
    }

    /// Human-readable command line for error messages
    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NpmCli {
    fn default() -> Self {
        Self::new("npm")
    }
}

/// Whether npm output reports an unknown package
fn is_not_found(output: &str) -> bool {
    NOT_FOUND_RE.is_match(output)
}

/// Parse `npm view --json` stdout into a registry record
fn parse_view_output(package: &str, stdout: &str) -> Result<RegistryRecord, RegistryError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::invalid_output(package, "empty output"));
    }

    let parsed: ViewOutput = serde_json::from_str(trimmed)
        .map_err(|e| RegistryError::invalid_output(package, e.to_string()))?;

    Ok(match parsed {
        ViewOutput::Fields {
            version,
            repository_url,
        } => RegistryRecord {
            version,
            repository_url: repository_url.filter(|url| !url.trim().is_empty()),
        },
        ViewOutput::VersionOnly(version) => RegistryRecord::without_repository(version),
    })
}

#[async_trait]
impl RegistryQuery for NpmCli {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn lookup(&self, package: &str) -> Result<Option<RegistryRecord>, RegistryError> {
        let args = self.build_args(package);
        debug!(command = %self.command_line(&args), "querying registry");

        let output = Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| RegistryError::spawn(&self.program, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            // With --json, npm repeats the error object on stdout
            if is_not_found(&stderr) || is_not_found(&stdout) {
                debug!(package, "package not found in registry");
                return Ok(None);
            }
            return Err(RegistryError::command_failed(
                self.command_line(&args),
                stderr.trim(),
            ));
        }

        parse_view_output(package, &stdout).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_name() {
        assert_eq!(NpmCli::default().registry_name(), "npm");
    }

    #[test]
    fn test_build_args() {
        let args = NpmCli::default().build_args("lodash");
        assert_eq!(
            args,
            vec!["view", "--json", "lodash", "version", "repository.url"]
        );
    }

    #[test]
    fn test_build_args_with_leading_args() {
        let npm = NpmCli::new("corepack").with_leading_args(vec!["npm".to_string()]);
        let args = npm.build_args("@scope/pkg");
        assert_eq!(args[0], "npm");
        assert_eq!(args[3], "@scope/pkg");
        assert_eq!(
            npm.command_line(&args),
            "corepack npm view --json @scope/pkg version repository.url"
        );
    }

    #[test]
    fn test_is_not_found_legacy_message() {
        assert!(is_not_found(
            "npm ERR! 404 'nope' is not in the npm registry."
        ));
    }

    #[test]
    fn test_is_not_found_current_message() {
        assert!(is_not_found(
            "npm error 404 'nope@*' is not in this registry."
        ));
        assert!(is_not_found("npm error code E404"));
    }

    #[test]
    fn test_is_not_found_other_failure() {
        assert!(!is_not_found("npm error code ETIMEDOUT"));
        assert!(!is_not_found("npm error code E4040"));
    }

    #[test]
    fn test_parse_object_output() {
        let stdout = r#"{
  "version": "2.0.0",
  "repository.url": "git+https://github.com/x/foo.git"
}"#;
        let record = parse_view_output("foo", stdout).unwrap();
        assert_eq!(record.version, "2.0.0");
        assert_eq!(
            record.repository_url.as_deref(),
            Some("git+https://github.com/x/foo.git")
        );
    }

    #[test]
    fn test_parse_object_without_repository() {
        let record = parse_view_output("foo", r#"{"version": "1.0.0"}"#).unwrap();
        assert!(record.repository_url.is_none());
    }

    #[test]
    fn test_parse_blank_repository_is_none() {
        let record =
            parse_view_output("foo", r#"{"version": "1.0.0", "repository.url": " "}"#).unwrap();
        assert!(record.repository_url.is_none());
    }

    #[test]
    fn test_parse_bare_version_output() {
        let record = parse_view_output("foo", "\"3.1.4\"\n").unwrap();
        assert_eq!(record.version, "3.1.4");
        assert!(record.repository_url.is_none());
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(matches!(
            parse_view_output("foo", "  \n"),
            Err(RegistryError::InvalidOutput { .. })
        ));
    }

    #[test]
    fn test_parse_unexpected_output() {
        assert!(matches!(
            parse_view_output("foo", "[1, 2]"),
            Err(RegistryError::InvalidOutput { .. })
        ));
    }

    #[tokio::test]
    async fn test_lookup_missing_program() {
        let npm = NpmCli::new("/nonexistent/get-changelogs-test/npm");
        let err = npm.lookup("foo").await.unwrap_err();
        assert!(matches!(err, RegistryError::Spawn { .. }));
    }

    #[cfg(unix)]
    mod with_fake_npm {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        /// Write a shell script standing in for npm; it is run through `sh`
        fn fake_npm(body: &str) -> (TempDir, NpmCli) {
            let dir = tempfile::tempdir().unwrap();
            let script = dir.path().join("npm.sh");
            fs::write(&script, body).unwrap();
            let npm = NpmCli::new("sh").with_leading_args(vec![script.display().to_string()]);
            (dir, npm)
        }

        #[tokio::test]
        async fn test_lookup_success() {
            let (_dir, npm) = fake_npm(
                r#"echo '{"version": "2.0.0", "repository.url": "git+https://github.com/x/foo.git"}'"#,
            );
            let record = npm.lookup("foo").await.unwrap().unwrap();
            assert_eq!(record.version, "2.0.0");
        }

        #[tokio::test]
        async fn test_lookup_receives_package_name() {
            let (_dir, npm) = fake_npm(r#"printf '"%s"' "$3""#);
            let record = npm.lookup("left-pad").await.unwrap().unwrap();
            assert_eq!(record.version, "left-pad");
        }

        #[tokio::test]
        async fn test_lookup_not_in_registry() {
            let (_dir, npm) = fake_npm(
                "echo \"npm ERR! 404 'nope' is not in the npm registry.\" >&2\nexit 1",
            );
            assert!(npm.lookup("nope").await.unwrap().is_none());
        }

        #[tokio::test]
        async fn test_lookup_other_failure() {
            let (_dir, npm) = fake_npm("echo 'npm ERR! code ETIMEDOUT' >&2\nexit 1");
            let err = npm.lookup("foo").await.unwrap_err();
            match err {
                RegistryError::CommandFailed { command, stderr } => {
                    assert!(command.contains("view --json foo"));
                    assert_eq!(stderr, "npm ERR! code ETIMEDOUT");
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }
}
