//! Shared test utilities for CLI tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ferry::github::{IssueGateway, PageInfo};
use ferry::{
    ExportError, Issue, IssueComment, ListIssuesParams, PaginatedIssues, RepositoryLocator,
};

/// A gateway that serves scripted pages and records every listing request.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    /// Listing requests in the order they arrived.
    pub requests: Arc<Mutex<Vec<(RepositoryLocator, ListIssuesParams)>>>,
    /// Pages returned in order; the last page reports no successor.
    pub pages: Arc<Vec<Vec<Issue>>>,
    /// Comments returned per issue number.
    pub comments: Arc<HashMap<u64, Vec<IssueComment>>>,
    /// Error returned instead of the first page, when set.
    pub failure: Option<ExportError>,
}

impl ScriptedGateway {
    /// Creates a gateway serving `pages`.
    pub fn with_pages(pages: Vec<Vec<Issue>>) -> Self {
        Self {
            pages: Arc::new(pages),
            ..Self::default()
        }
    }

    /// Returns a snapshot of the listing requests received so far.
    pub fn recorded_requests(&self) -> Vec<(RepositoryLocator, ListIssuesParams)> {
        self.requests
            .lock()
            .expect("requests mutex should be available")
            .clone()
    }
}

#[async_trait]
impl IssueGateway for ScriptedGateway {
    async fn list_issues(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<PaginatedIssues, ExportError> {
        self.requests
            .lock()
            .expect("requests mutex should be available")
            .push((locator.clone(), params.clone()));

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let index = usize::try_from(params.page.saturating_sub(1)).expect("page index fits");
        let items = self.pages.get(index).cloned().unwrap_or_default();
        let has_next = index + 1 < self.pages.len();
        Ok(PaginatedIssues {
            items,
            page_info: PageInfo::new(params.page).with_has_next(has_next),
        })
    }

    async fn issue_comments(
        &self,
        _locator: &RepositoryLocator,
        issue_number: u64,
        limit: usize,
    ) -> Result<Vec<IssueComment>, ExportError> {
        let mut comments = self
            .comments
            .get(&issue_number)
            .cloned()
            .unwrap_or_default();
        comments.truncate(limit);
        Ok(comments)
    }
}
