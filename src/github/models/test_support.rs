//! Test helpers for constructing `Issue` and `IssueComment` fixtures.
//!
//! # Examples
//!
//! ```
//! use ferry::github::models::test_support::{issue_with_labels, minimal_issue};
//!
//! let issue = minimal_issue(1);
//! assert_eq!(issue.reporter, "octocat");
//!
//! let labelled = issue_with_labels(2, &["bug", "help wanted"]);
//! assert_eq!(labelled.labels.len(), 2);
//! ```

use super::{Issue, IssueComment};

/// Constructs an open issue with fixed timestamps, no labels and no comments.
#[must_use]
pub fn minimal_issue(number: u64) -> Issue {
    Issue {
        number,
        title: format!("Issue {number}"),
        body: format!("Body of issue {number}"),
        created_at: "2021-03-05T14:07:00Z".to_owned(),
        updated_at: "2021-03-06T08:30:00Z".to_owned(),
        state: "open".to_owned(),
        reporter: "octocat".to_owned(),
        labels: Vec::new(),
        comment_count: 0,
        is_pull_request: false,
    }
}

/// Constructs a minimal issue carrying the given label names.
#[must_use]
pub fn issue_with_labels(number: u64, labels: &[&str]) -> Issue {
    Issue {
        labels: labels.iter().map(|label| (*label).to_owned()).collect(),
        ..minimal_issue(number)
    }
}

/// Constructs a minimal issue that reports `count` comments.
#[must_use]
pub fn issue_with_comment_count(number: u64, count: u64) -> Issue {
    Issue {
        comment_count: count,
        ..minimal_issue(number)
    }
}

/// Constructs a minimal record flagged as a pull request.
#[must_use]
pub fn pull_request_record(number: u64) -> Issue {
    Issue {
        is_pull_request: true,
        ..minimal_issue(number)
    }
}

/// Constructs a comment with the given author and body.
///
/// ```
/// use ferry::github::models::test_support::comment;
///
/// let reply = comment("alice", "Thanks!");
/// assert_eq!(reply.created_at, "2021-03-05T15:00:00Z");
/// ```
#[must_use]
pub fn comment(author: &str, body: &str) -> IssueComment {
    IssueComment {
        author: author.to_owned(),
        created_at: "2021-03-05T15:00:00Z".to_owned(),
        body: body.to_owned(),
    }
}
