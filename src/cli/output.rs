//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use ferry::config::OutputDestination;
use ferry::export::ExportSummary;
use ferry::{ExportError, RepositoryLocator};

/// Writes a one-line report of a finished export to the given writer.
pub fn write_export_summary<W: Write>(
    writer: &mut W,
    locator: &RepositoryLocator,
    destination: &OutputDestination,
    summary: &ExportSummary,
) -> Result<(), ExportError> {
    writeln!(
        writer,
        "Exported {issues} issues from {owner}/{repo} to {destination} \
         ({pages} pages, {comments} comments, {skipped} pull requests skipped)",
        issues = summary.issues_exported,
        owner = locator.owner().as_str(),
        repo = locator.repository().as_str(),
        pages = summary.pages,
        comments = summary.comments_fetched,
        skipped = summary.pull_requests_skipped,
    )
    .map_err(|e| io_error(&e))
}

/// Converts an I/O error to an [`ExportError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ExportError {
    ExportError::Io {
        message: error.to_string(),
    }
}
