//! Issue export operation.
//!
//! Resolves the repository and token, opens the CSV destination, runs the
//! paginated export, and reports what was written.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use ferry::config::{OutputDestination, STDOUT_MARKER};
use ferry::export::{CsvSink, ExportSummary, IssueExport, RowSink};
use ferry::github::IssueGateway;
use ferry::{
    ExportError, FerryConfig, ListIssuesParams, OctocrabIssueGateway, PersonalAccessToken,
    RepositoryLocator,
};
use tracing::info;

use super::output::write_export_summary;

/// Exports every issue of the configured repository.
///
/// The summary goes to stdout, or to stderr when the CSV itself is written
/// to stdout.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is inconsistent or the repository is missing
/// - The token is missing or rejected
/// - A GitHub API call fails
/// - Writing to the output fails
pub async fn run(config: &FerryConfig) -> Result<(), ExportError> {
    if config.output.as_deref() == Some(STDOUT_MARKER) {
        let mut stderr = io::stderr().lock();
        run_with_gateway_builder(config, OctocrabIssueGateway::for_token, &mut stderr).await
    } else {
        let mut stdout = io::stdout().lock();
        run_with_gateway_builder(config, OctocrabIssueGateway::for_token, &mut stdout).await
    }
}

/// Exports issues using a custom gateway builder.
///
/// This function is exposed for testing with scripted gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &FerryConfig,
    build_gateway: F,
    summary_writer: &mut W,
) -> Result<(), ExportError>
where
    G: IssueGateway,
    F: FnOnce(&PersonalAccessToken, &RepositoryLocator) -> Result<G, ExportError>,
    W: Write,
{
    config.validate()?;
    let locator = config.repository_locator()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let params = config.listing_params()?;
    let destination = config.output_destination(&locator);

    let gateway = build_gateway(&token, &locator)?;
    let export = IssueExport::new(&gateway, config.export_layout())
        .with_concurrency(config.concurrency_limit()?);

    info!(
        owner = locator.owner().as_str(),
        repo = locator.repository().as_str(),
        state = %params.state,
        destination = %destination,
        "exporting issues"
    );

    let summary = match &destination {
        OutputDestination::Stdout => {
            let mut sink = CsvSink::new(io::stdout().lock());
            export_into(&export, &locator, &params, &mut sink).await?
        }
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| ExportError::Io {
                message: format!("failed to create output file '{}': {e}", path.display()),
            })?;
            let mut sink = CsvSink::new(BufWriter::new(file));
            export_into(&export, &locator, &params, &mut sink).await?
        }
    };

    write_export_summary(summary_writer, &locator, &destination, &summary)
}

async fn export_into<G, S>(
    export: &IssueExport<'_, G>,
    locator: &RepositoryLocator,
    params: &ListIssuesParams,
    sink: &mut S,
) -> Result<ExportSummary, ExportError>
where
    G: IssueGateway,
    S: RowSink,
{
    let summary = export.run(locator, params, sink).await?;
    info!(
        pages = summary.pages,
        issues = summary.issues_exported,
        "export finished"
    );
    Ok(summary)
}
