//! Page-by-page export of a repository's issues.
//!
//! Pages are requested strictly in sequence. Each page is filtered down to
//! true issues, enriched with comments through a bounded stream, and written
//! in API order before the next page is requested.

use std::num::NonZeroUsize;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::info;

use crate::github::{ExportError, Issue, IssueGateway, ListIssuesParams, RepositoryLocator};

use super::enrich::comment_lines;
use super::layout::ExportLayout;
use super::record::{build_row, headers};
use super::sink::RowSink;

/// Default number of comment requests in flight per page.
pub const DEFAULT_CONCURRENCY: NonZeroUsize = NonZeroUsize::MIN.saturating_add(7);

/// Counters describing a finished export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Listing pages fetched.
    pub pages: u32,
    /// Data rows written.
    pub issues_exported: usize,
    /// Pull requests dropped from the listing.
    pub pull_requests_skipped: usize,
    /// Comments fetched across all issues.
    pub comments_fetched: usize,
}

/// Drives an export through an [`IssueGateway`].
pub struct IssueExport<'client, Gateway>
where
    Gateway: IssueGateway + ?Sized,
{
    client: &'client Gateway,
    layout: ExportLayout,
    concurrency: NonZeroUsize,
}

impl<'client, Gateway> IssueExport<'client, Gateway>
where
    Gateway: IssueGateway + ?Sized,
{
    /// Creates an export using `client` and the default concurrency.
    #[must_use]
    pub const fn new(client: &'client Gateway, layout: ExportLayout) -> Self {
        Self {
            client,
            layout,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Limits how many comment requests run at once within a page.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: NonZeroUsize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Writes the header, then every issue of the repository, to `sink`.
    ///
    /// Listing starts at `params.page` and follows the gateway's page info
    /// until no next page is advertised. The sink is flushed on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExportError`] raised by the gateway, the record
    /// formatter, or the sink. Rows written before the failure stay in the
    /// sink.
    pub async fn run<S>(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
        sink: &mut S,
    ) -> Result<ExportSummary, ExportError>
    where
        S: RowSink + ?Sized,
    {
        sink.write_row(&headers(&self.layout))?;

        let mut summary = ExportSummary::default();
        let mut request = params.clone();
        loop {
            let page = self.client.list_issues(locator, &request).await?;
            summary.pages = summary.pages.saturating_add(1);

            let (pull_requests, issues): (Vec<Issue>, Vec<Issue>) = page
                .items
                .into_iter()
                .partition(|issue| issue.is_pull_request);
            summary.pull_requests_skipped += pull_requests.len();
            info!(page = request.page, "handling {} issues...", issues.len());

            for (issue, comments) in self.enrich_page(locator, issues).await? {
                summary.comments_fetched += comments.len();
                let row = build_row(&issue, comments, &self.layout)?;
                sink.write_row(&row)?;
                summary.issues_exported += 1;
            }

            match page.page_info.next_page() {
                Some(next) => request = request.at_page(next),
                None => break,
            }
        }

        sink.finish()?;
        Ok(summary)
    }

    async fn enrich_page(
        &self,
        locator: &RepositoryLocator,
        issues: Vec<Issue>,
    ) -> Result<Vec<(Issue, Vec<String>)>, ExportError> {
        stream::iter(issues)
            .map(|issue| async move {
                let comments =
                    comment_lines(self.client, locator, &issue, self.layout.max_comments)
                        .await?;
                Ok::<_, ExportError>((issue, comments))
            })
            .buffered(self.concurrency.get())
            .try_collect()
            .await
    }
}
