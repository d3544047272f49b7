//! Data models representing repository issues and their comments.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into the public domain types consumed by the export pipeline.

use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// One entry from the repository issue listing.
///
/// GitHub's issues endpoint also returns pull requests; those carry
/// `is_pull_request = true` and never reach the export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    /// Issue number within the repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body; empty when GitHub returns `null`.
    pub body: String,
    /// Creation timestamp as returned by the API (RFC 3339).
    pub created_at: String,
    /// Last update timestamp as returned by the API (RFC 3339).
    pub updated_at: String,
    /// State reported by GitHub (`open`, `closed`).
    pub state: String,
    /// Login of the user who opened the issue.
    pub reporter: String,
    /// Label names in the order GitHub returned them.
    pub labels: Vec<String>,
    /// Number of comments GitHub reports for the issue.
    pub comment_count: u64,
    /// Whether the raw record carried a `pull_request` marker.
    pub is_pull_request: bool,
}

/// A single issue comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueComment {
    /// Author login.
    pub author: String,
    /// Creation timestamp exactly as returned by the API.
    pub created_at: String,
    /// Comment body; empty when GitHub returns `null`.
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub(crate) number: u64,
    pub(crate) title: String,
    pub(crate) body: Option<String>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
    pub(crate) state: String,
    pub(crate) user: ApiUser,
    #[serde(default)]
    pub(crate) labels: Vec<ApiLabel>,
    #[serde(default)]
    pub(crate) comments: u64,
    pub(crate) pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiComment {
    pub(crate) body: Option<String>,
    pub(crate) user: ApiUser,
    pub(crate) created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: String,
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            title: value.title,
            body: value.body.unwrap_or_default(),
            created_at: value.created_at,
            updated_at: value.updated_at,
            state: value.state,
            reporter: value.user.login,
            labels: value.labels.into_iter().map(|label| label.name).collect(),
            comment_count: value.comments,
            is_pull_request: value.pull_request.is_some(),
        }
    }
}

impl From<ApiComment> for IssueComment {
    fn from(value: ApiComment) -> Self {
        Self {
            author: value.user.login,
            created_at: value.created_at,
            body: value.body.unwrap_or_default(),
        }
    }
}
