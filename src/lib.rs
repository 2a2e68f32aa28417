pub mod args;
pub mod config;
pub mod credentials;
pub mod error;
pub mod push;
pub mod report;
pub mod version;

pub use args::{ExportArgs, USAGE};
pub use config::ExportConfig;
pub use credentials::Credentials;
pub use error::{ErrorCategory, ExportError, Result};
pub use push::{MicrobClient, PushOutcome, PushRequest};
pub use report::ReportParser;
pub use version::{CommandVersion, FixedVersion, VersionProvider};

/// Load credentials, read the metric and version, and push it.
///
/// A non-200 response is returned as [`ExportError::Rejected`].
pub async fn export(
    args: &ExportArgs,
    config: &ExportConfig,
    version_provider: &dyn VersionProvider,
) -> Result<()> {
    let credentials = Credentials::load(&args.auth_conf).await?;
    tracing::debug!(server = %credentials.server, "loaded credentials");

    let value = config.report_parser().parse_file(&args.report).await?;
    let version = version_provider.version().await?;
    tracing::info!(
        name = %args.metric_name,
        value = %value,
        version = %version,
        tab = %args.tab,
        "collected metric"
    );

    let client = MicrobClient::from_credentials(&credentials, config.timeout)?;
    let request = PushRequest::new(credentials.token, &args.metric_name, value, version)
        .with_tab(&args.tab);

    match client.push(&request).await? {
        PushOutcome::Accepted => Ok(()),
        PushOutcome::Rejected(status) => Err(ExportError::Rejected(status)),
    }
}
