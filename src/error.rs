use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read report {}: {source}", .path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed credentials in {}: expected `server:token`", .path.display())]
    MalformedCredentials { path: PathBuf },

    #[error("metric not found: no line contains {marker:?}")]
    MetricNotFound { marker: String },

    #[error("column {column} out of range on line {line_no} ({found} columns): {line:?}")]
    ColumnOutOfRange {
        column: usize,
        found: usize,
        line_no: usize,
        line: String,
    },

    #[error("column {column} is empty on line {line_no}")]
    EmptyMetric { column: usize, line_no: usize },

    #[error("failed to run `{program} --version`: {source}")]
    VersionCommand {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected version output: {output:?}")]
    MalformedVersion { output: String },

    #[error("invalid push url: {0}")]
    InvalidUrl(String),

    /// The wrapped error never carries the request url, which holds the token.
    #[error("http request failed: {0}")]
    Transport(reqwest::Error),

    #[error("export error http: {}", .0.as_u16())]
    Rejected(StatusCode),
}

/// Coarse grouping used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Parse,
    Transport,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } | Self::MalformedCredentials { .. } | Self::InvalidUrl(_) => {
                ErrorCategory::Config
            }
            Self::ReadReport { .. }
            | Self::MetricNotFound { .. }
            | Self::ColumnOutOfRange { .. }
            | Self::EmptyMetric { .. }
            | Self::VersionCommand { .. }
            | Self::MalformedVersion { .. } => ErrorCategory::Parse,
            Self::Transport(_) | Self::Rejected(_) => ErrorCategory::Transport,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Parse => 2,
            ErrorCategory::Transport => 3,
        }
    }
}

impl ExportError {
    /// Wrap a reqwest error, dropping the url so the auth token stays out of messages.
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
