//! Comment resolution for a single issue.

use crate::github::{ExportError, Issue, IssueComment, IssueGateway, RepositoryLocator};

/// Renders a comment as a single cell.
///
/// Only the first `#` of the body is removed; the timestamp is written
/// exactly as GitHub returned it.
///
/// # Examples
///
/// ```
/// use ferry::export::comment_line;
/// use ferry::github::IssueComment;
///
/// let comment = IssueComment {
///     author: "alice".to_owned(),
///     created_at: "2021-03-05T15:00:00Z".to_owned(),
///     body: "see #12 and #13".to_owned(),
/// };
/// assert_eq!(
///     comment_line(&comment),
///     "Comment: alice: 2021-03-05T15:00:00Z: see 12 and #13"
/// );
/// ```
#[must_use]
pub fn comment_line(comment: &IssueComment) -> String {
    format!(
        "Comment: {author}: {created_at}: {body}",
        author = comment.author,
        created_at = comment.created_at,
        body = comment.body.replacen('#', "", 1)
    )
}

/// Resolves up to `limit` comment cells for `issue`.
///
/// Issues reporting zero comments never trigger a request.
///
/// # Errors
///
/// Propagates any [`ExportError`] from the gateway.
pub async fn comment_lines<G>(
    gateway: &G,
    locator: &RepositoryLocator,
    issue: &Issue,
    limit: usize,
) -> Result<Vec<String>, ExportError>
where
    G: IssueGateway + ?Sized,
{
    if issue.comment_count == 0 {
        return Ok(Vec::new());
    }

    let comments = gateway
        .issue_comments(locator, issue.number, limit)
        .await?;
    Ok(comments.iter().map(comment_line).collect())
}
