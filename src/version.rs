//! Version discovery for the benchmarked tool.

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{ExportError, Result};

pub const DEFAULT_VERSION_PROGRAM: &str = "tarantool";

/// Source of the version string attached to every pushed metric.
#[async_trait]
pub trait VersionProvider: Send + Sync {
    async fn version(&self) -> Result<String>;
}

/// Runs `<program> --version` and reads the version token from its output.
#[derive(Debug, Clone)]
pub struct CommandVersion {
    pub program: String,
}

impl CommandVersion {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl VersionProvider for CommandVersion {
    async fn version(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .await
            .map_err(|source| ExportError::VersionCommand {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            tracing::warn!(
                program = %self.program,
                status = %output.status,
                "version command exited unsuccessfully"
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_version_output(&stdout)
    }
}

/// A version known up front, e.g. pinned through the environment.
#[derive(Debug, Clone)]
pub struct FixedVersion(pub String);

#[async_trait]
impl VersionProvider for FixedVersion {
    async fn version(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Extract `<version>` from output shaped like `<name> <version> ...`.
pub fn parse_version_output(output: &str) -> Result<String> {
    output
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .ok_or_else(|| ExportError::MalformedVersion {
            output: output.to_string(),
        })
}
