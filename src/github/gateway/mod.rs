//! Gateways for reading a repository's issue tracker through Octocrab.
//!
//! The export pipeline only talks to [`IssueGateway`], so tests can swap in
//! mocks while [`OctocrabIssueGateway`] performs real HTTP requests.

mod client;
mod error_mapping;
mod issues;
mod types;

pub use issues::OctocrabIssueGateway;
pub use types::{IssueState, ListIssuesParams, MAX_PER_PAGE, PaginatedIssues};

use async_trait::async_trait;

use crate::github::error::ExportError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::IssueComment;

/// Source of issues and issue comments for one repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch one page of the repository's issue listing.
    ///
    /// The listing includes pull requests; callers filter them out.
    async fn list_issues(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<PaginatedIssues, ExportError>;

    /// Fetch up to `limit` comments on the given issue, oldest first.
    ///
    /// Implementations stop requesting further pages once `limit` comments
    /// have been collected.
    async fn issue_comments(
        &self,
        locator: &RepositoryLocator,
        issue_number: u64,
        limit: usize,
    ) -> Result<Vec<IssueComment>, ExportError>;
}
