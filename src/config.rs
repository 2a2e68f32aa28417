//! Runtime settings read from the environment.

use std::env;
use std::time::Duration;

use crate::push::DEFAULT_TIMEOUT;
use crate::report::{DEFAULT_COLUMN, DEFAULT_MARKER, ReportParser};
use crate::version::{CommandVersion, DEFAULT_VERSION_PROGRAM, FixedVersion, VersionProvider};

pub const TIMEOUT_VAR: &str = "MICROB_TIMEOUT_SECS";
pub const MARKER_VAR: &str = "MICROB_REPORT_MARKER";
pub const COLUMN_VAR: &str = "MICROB_REPORT_COLUMN";
pub const VERSION_CMD_VAR: &str = "MICROB_VERSION_CMD";
pub const VERSION_VAR: &str = "MICROB_VERSION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub timeout: Duration,
    pub marker: String,
    pub column: usize,
    pub version_program: String,
    /// Skips the version command when set.
    pub pinned_version: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            marker: DEFAULT_MARKER.to_string(),
            column: DEFAULT_COLUMN,
            version_program: DEFAULT_VERSION_PROGRAM.to_string(),
            pinned_version: None,
        }
    }
}

impl ExportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            timeout: non_empty(TIMEOUT_VAR)
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            marker: lookup(MARKER_VAR)
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.marker),
            column: non_empty(COLUMN_VAR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.column),
            version_program: non_empty(VERSION_CMD_VAR).unwrap_or(defaults.version_program),
            pinned_version: non_empty(VERSION_VAR).map(|v| v.trim().to_string()),
        }
    }

    pub fn report_parser(&self) -> ReportParser {
        ReportParser::new(self.marker.clone(), self.column)
    }

    pub fn version_provider(&self) -> Box<dyn VersionProvider> {
        match &self.pinned_version {
            Some(version) => Box::new(FixedVersion(version.clone())),
            None => Box::new(CommandVersion::new(self.version_program.clone())),
        }
    }
}
