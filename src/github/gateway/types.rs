//! Public types for issue listing operations.

use std::fmt;
use std::str::FromStr;

use crate::github::error::ExportError;
use crate::github::models::Issue;
use crate::github::pagination::PageInfo;

/// Largest page size GitHub accepts for list endpoints.
pub const MAX_PER_PAGE: u8 = 100;

/// Issue state filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueState {
    /// Only open issues.
    Open,
    /// Only closed issues.
    Closed,
    /// All issues regardless of state.
    #[default]
    All,
}

impl IssueState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

impl FromStr for IssueState {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "all" => Ok(Self::All),
            _ => Err(ExportError::Configuration {
                message: format!(
                    "unsupported issue state '{s}': valid options are 'open', 'closed' or 'all'"
                ),
            }),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one issue listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIssuesParams {
    /// Filter by state.
    pub state: IssueState,
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (1..=100).
    pub per_page: u8,
}

impl ListIssuesParams {
    /// Returns the same request moved to another page.
    #[must_use]
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

impl Default for ListIssuesParams {
    fn default() -> Self {
        Self {
            state: IssueState::All,
            page: 1,
            per_page: MAX_PER_PAGE,
        }
    }
}

/// One page of the issue listing.
#[derive(Debug, Clone, Default)]
pub struct PaginatedIssues {
    /// Issues (and pull requests) on this page, in API order.
    pub items: Vec<Issue>,
    /// Pagination state.
    pub page_info: PageInfo,
}
