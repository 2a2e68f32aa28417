use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use microb_export::{ExportArgs, ExportConfig, USAGE, export};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "microb_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let Some(args) = ExportArgs::parse(env::args_os().skip(1)) else {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    };

    let config = ExportConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let version_provider = config.version_provider();
    match export(&args, &config, version_provider.as_ref()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
