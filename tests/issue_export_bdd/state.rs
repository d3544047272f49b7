//! Scenario state and export runner for the issue export BDD tests.

use ferry::export::{CsvSink, ExportLayout, ExportSummary, IssueExport};
use ferry::{
    ExportError, ListIssuesParams, OctocrabIssueGateway, PersonalAccessToken, RepositoryLocator,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::{Mock, MockServer};

use super::runtime::{SharedRuntime, ensure_runtime_and_server, mount};

/// Rows of the exported table as read back from the CSV output.
pub(crate) type Table = Vec<Vec<String>>;

#[derive(ScenarioState, Default)]
pub(crate) struct ExportState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) table: Slot<Table>,
    pub(crate) summary: Slot<ExportSummary>,
    pub(crate) error: Slot<ExportError>,
}

/// Mounts `mock` on the scenario's mock server.
pub(crate) fn mount_mock(export_state: &ExportState, mock: Mock) {
    mount(&export_state.runtime, &export_state.server, mock)
        .unwrap_or_else(|error| panic!("failed to mount mock: {error}"));
}

/// Returns the mock server's base URI.
pub(crate) fn server_uri(export_state: &ExportState) -> String {
    ensure_runtime_and_server(&export_state.runtime, &export_state.server)
        .unwrap_or_else(|error| panic!("failed to start mock server: {error}"));
    export_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"))
}

/// Exports `repo_url` (with `SERVER` standing for the mock server) into an
/// in-memory CSV buffer and parses it back.
pub(crate) fn run_issue_export(
    export_state: &ExportState,
    repo_url: &str,
) -> Result<(ExportSummary, Table), ExportError> {
    let resolved_url = resolve_mock_server_url(&server_uri(export_state), repo_url);
    let locator = RepositoryLocator::parse(&resolved_url)?;

    let runtime = export_state
        .runtime
        .get()
        .ok_or_else(|| ExportError::Api {
            message: "runtime not initialised".to_owned(),
        })?;

    let (summary, bytes) = runtime.block_on(async {
        let token_value = export_state.token.get().ok_or(ExportError::MissingToken)?;
        let token = PersonalAccessToken::new(token_value)?;
        let gateway = OctocrabIssueGateway::for_token(&token, &locator)?;

        let mut sink = CsvSink::new(Vec::new());
        let summary = IssueExport::new(&gateway, ExportLayout::default())
            .run(&locator, &ListIssuesParams::default(), &mut sink)
            .await?;
        Ok::<_, ExportError>((summary, sink.into_inner()?))
    })?;

    Ok((summary, parse_table(&bytes)?))
}

fn parse_table(bytes: &[u8]) -> Result<Table, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    reader
        .records()
        .map(|record| {
            record
                .map(|fields| fields.iter().map(str::to_owned).collect())
                .map_err(|error| ExportError::Io {
                    message: error.to_string(),
                })
        })
        .collect()
}

fn resolve_mock_server_url(server_url: &str, repo_url: &str) -> String {
    let cleaned_url = repo_url.trim_matches('"');
    if cleaned_url.contains("://SERVER") {
        cleaned_url
            .replace("https://SERVER", server_url)
            .replace("http://SERVER", server_url)
    } else {
        cleaned_url.replace("SERVER", server_url)
    }
}
