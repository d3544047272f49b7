//! Octocrab-backed issue gateway and its HTTP-level tests.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use tracing::debug;

use crate::github::error::ExportError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiComment, ApiIssue, Issue, IssueComment};
use crate::github::pagination::PageInfo;
use crate::github::rate_limit::RateLimitInfo;

use super::IssueGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{FailureKind, classify, map_octocrab_error};
use super::types::{ListIssuesParams, MAX_PER_PAGE, PaginatedIssues};

/// Octocrab-backed issue gateway.
pub struct OctocrabIssueGateway {
    client: Octocrab,
}

impl OctocrabIssueGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated Octocrab client for the repository's host.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidUrl` when the base URI cannot be parsed or
    /// `ExportError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, ExportError> {
        let octocrab = build_octocrab_client(token, locator)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl IssueGateway for OctocrabIssueGateway {
    async fn list_issues(
        &self,
        locator: &RepositoryLocator,
        params: &ListIssuesParams,
    ) -> Result<PaginatedIssues, ExportError> {
        validate_pagination_params(params.page, params.per_page)?;

        let page_str = params.page.to_string();
        let per_page_str = params.per_page.to_string();
        let query_params = [
            ("state", params.state.as_str()),
            ("page", page_str.as_str()),
            ("per_page", per_page_str.as_str()),
        ];

        let page_result: Page<ApiIssue> = match self
            .client
            .get(locator.issues_path(), Some(&query_params))
            .await
        {
            Ok(page_result) => page_result,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("list issues", &error)
                    .await);
            }
        };

        let has_next = page_result.next.is_some();
        let items: Vec<Issue> = page_result.items.into_iter().map(Issue::from).collect();
        let page_info = PageInfo::new(params.page).with_has_next(has_next);

        Ok(PaginatedIssues { items, page_info })
    }

    async fn issue_comments(
        &self,
        locator: &RepositoryLocator,
        issue_number: u64,
        limit: usize,
    ) -> Result<Vec<IssueComment>, ExportError> {
        debug!(issue = issue_number, limit, "fetching issue comments");

        let per_page = comment_page_size(limit).to_string();
        let query_params = [("per_page", per_page.as_str())];

        let mut page: Page<ApiComment> = match self
            .client
            .get(locator.issue_comments_path(issue_number), Some(&query_params))
            .await
        {
            Ok(page) => page,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit("issue comments", &error)
                    .await);
            }
        };

        let mut comments: Vec<IssueComment> = Vec::new();
        loop {
            let next = page.next.take();
            comments.extend(
                std::mem::take(&mut page.items)
                    .into_iter()
                    .map(IssueComment::from),
            );
            if comments.len() >= limit || next.is_none() {
                break;
            }

            page = match self.client.get_page::<ApiComment>(&next).await {
                Ok(Some(following)) => following,
                Ok(None) => break,
                Err(error) => {
                    return Err(self
                        .map_octocrab_error_with_rate_limit("issue comments", &error)
                        .await);
                }
            };
        }

        comments.truncate(limit);
        Ok(comments)
    }
}

impl OctocrabIssueGateway {
    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> ExportError {
        if classify(error) != FailureKind::RateLimited {
            return map_octocrab_error(operation, error);
        }

        let rate_limit = self.fetch_rate_limit_info().await;
        match map_octocrab_error(operation, error) {
            ExportError::RateLimitExceeded { message, .. } => {
                let detail = match &rate_limit {
                    Some(info) => match info.reset_time() {
                        Some(time) => format!(
                            "{message} (resets at {time}, epoch {epoch})",
                            time = time.to_rfc3339(),
                            epoch = info.reset_at()
                        ),
                        None => format!("{message} (resets at epoch {})", info.reset_at()),
                    },
                    None => message,
                };
                ExportError::RateLimitExceeded {
                    rate_limit,
                    message: detail,
                }
            }
            other => other,
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let remaining = u32::try_from(rate.remaining).ok()?;
        Some(RateLimitInfo::new(remaining, rate.reset))
    }
}

/// Page size for a comment request that needs at most `limit` comments.
fn comment_page_size(limit: usize) -> u8 {
    u8::try_from(limit).map_or(MAX_PER_PAGE, |size| size.clamp(1, MAX_PER_PAGE))
}

fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), ExportError> {
    if page == 0 {
        return Err(ExportError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(ExportError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(ExportError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}
