//! Ferry CLI entrypoint for exporting GitHub issues to CSV.

use std::io::{self, Write};
use std::process::ExitCode;

use ferry::{ExportError, FerryConfig};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ExportError> {
    let config = load_config()?;
    cli::export_issues::run(&config).await
}

/// Installs the stderr log subscriber, honouring `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ExportError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<FerryConfig, ExportError> {
    FerryConfig::load().map_err(|error| ExportError::Configuration {
        message: error.to_string(),
    })
}
