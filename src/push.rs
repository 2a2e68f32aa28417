use std::time::Duration;

use reqwest::{Client, Request, StatusCode, Url};
use serde::Serialize;

use crate::credentials::Credentials;
use crate::error::{ExportError, Result};

pub const DEFAULT_UNIT: &str = "rps";
pub const DEFAULT_TAB: &str = "nosqlbench";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Query parameters of a single `/push` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushRequest {
    /// Auth token.
    pub key: String,
    /// Metric name.
    pub name: String,
    /// Metric value, passed through as text.
    pub param: String,
    /// Version of the benchmarked tool.
    pub v: String,
    pub unit: String,
    /// Dashboard tab the metric is grouped under.
    pub tab: String,
}

impl PushRequest {
    pub fn new(
        token: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            key: token.into(),
            name: name.into(),
            param: value.into(),
            v: version.into(),
            unit: DEFAULT_UNIT.to_string(),
            tab: DEFAULT_TAB.to_string(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }
}

/// Result of a push that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Accepted,
    Rejected(StatusCode),
}

pub struct MicrobClient {
    http_client: Client,
    push_url: Url,
}

impl MicrobClient {
    pub fn new(server: &str) -> Result<Self> {
        Self::with_timeout(server, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(server: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ExportError::transport)?;
        Ok(Self {
            http_client,
            push_url: push_url(server)?,
        })
    }

    pub fn from_credentials(credentials: &Credentials, timeout: Duration) -> Result<Self> {
        Self::with_timeout(&credentials.server, timeout)
    }

    /// Build the GET request without sending it.
    pub fn build_request(&self, request: &PushRequest) -> Result<Request> {
        self.http_client
            .get(self.push_url.clone())
            .query(request)
            .build()
            .map_err(ExportError::transport)
    }

    pub async fn push(&self, request: &PushRequest) -> Result<PushOutcome> {
        let http_request = self.build_request(request)?;
        tracing::debug!(
            url = %redacted(http_request.url()),
            "sending push request"
        );

        println!("Exporting result into microb storage:");
        let response = self
            .http_client
            .execute(http_request)
            .await
            .map_err(ExportError::transport)?;
        let status = response.status();

        if status == StatusCode::OK {
            println!("Export complete");
            Ok(PushOutcome::Accepted)
        } else {
            println!("Export error http: {}", status.as_u16());
            tracing::warn!(status = status.as_u16(), "push rejected");
            Ok(PushOutcome::Rejected(status))
        }
    }
}

/// `http://<server>/push`, or `<server>/push` when a scheme is already given.
fn push_url(server: &str) -> Result<Url> {
    let server = server.trim_end_matches('/');
    let base = if server.starts_with("http://") || server.starts_with("https://") {
        format!("{}/push", server)
    } else {
        format!("http://{}/push", server)
    };
    Url::parse(&base).map_err(|e| ExportError::InvalidUrl(format!("{}: {}", base, e)))
}

/// Copy of `url` with the auth token masked, for logging.
fn redacted(url: &Url) -> Url {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked
}
