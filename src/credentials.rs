//! Microb storage credentials.
//!
//! The auth file holds a single `server:token` line as handed out by the
//! storage service.

use std::path::Path;

use crate::error::{ExportError, Result};

/// Server address and auth token for the push endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub server: String,
    pub token: String,
}

impl Credentials {
    /// Read the auth file and parse its first line.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ExportError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&contents).ok_or_else(|| ExportError::MalformedCredentials {
            path: path.to_path_buf(),
        })
    }

    /// Parse `server:token` from the first line of `contents`.
    ///
    /// Splits on the last colon so the server may carry a port.
    pub fn parse(contents: &str) -> Option<Self> {
        let line = contents.lines().next()?;
        let (server, token) = line.rsplit_once(':')?;
        let (server, token) = (server.trim(), token.trim());

        if server.is_empty() || token.is_empty() {
            return None;
        }

        Some(Credentials {
            server: server.to_string(),
            token: token.to_string(),
        })
    }
}
