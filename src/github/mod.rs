//! GitHub issue tracker access.
//!
//! This module wraps Octocrab to list a repository's issues page by page and
//! fetch each issue's comments. Errors are mapped into [`ExportError`]
//! variants so callers can surface precise failures without exposing Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use error::ExportError;
pub use gateway::{
    IssueGateway, IssueState, ListIssuesParams, MAX_PER_PAGE, OctocrabIssueGateway,
    PaginatedIssues,
};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{Issue, IssueComment};
pub use pagination::PageInfo;
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockIssueGateway;
