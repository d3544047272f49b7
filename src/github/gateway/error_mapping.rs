//! Classification of Octocrab failures into [`ExportError`] variants.

use http::StatusCode;
use octocrab::GitHubError;

use crate::github::error::ExportError;

/// How a failed GitHub call is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FailureKind {
    /// 403/429 whose message or documentation link names the rate limit.
    RateLimited,
    /// 401, or a 403 unrelated to the rate limit.
    Rejected,
    /// 404; usually a misspelt owner or repository, or a token without access.
    NotFound,
    /// Any other GitHub status.
    Status,
    /// The request never produced a GitHub response.
    Transport,
    /// The response body did not match the expected record shape.
    Decode,
    /// Client-side failures such as URI construction.
    Other,
}

pub(super) fn classify(error: &octocrab::Error) -> FailureKind {
    match error {
        octocrab::Error::GitHub { source, .. } => classify_response(source),
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => FailureKind::Transport,
        octocrab::Error::Serde { .. } | octocrab::Error::Json { .. } => FailureKind::Decode,
        _ => FailureKind::Other,
    }
}

fn classify_response(source: &GitHubError) -> FailureKind {
    let status = source.status_code;
    let names_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if names_rate_limit => {
            FailureKind::RateLimited
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FailureKind::Rejected,
        StatusCode::NOT_FOUND => FailureKind::NotFound,
        _ => FailureKind::Status,
    }
}

/// Maps `error` raised by `operation` without consulting the rate-limit
/// endpoint; rate-limit failures carry no [`RateLimitInfo`].
///
/// [`RateLimitInfo`]: crate::github::RateLimitInfo
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ExportError {
    let kind = classify(error);
    let octocrab::Error::GitHub { source, .. } = error else {
        return map_client_error(operation, kind, error);
    };

    let status = source.status_code;
    let message = &source.message;
    match kind {
        FailureKind::RateLimited => ExportError::RateLimitExceeded {
            rate_limit: None,
            message: format!("{operation} failed: {message}"),
        },
        FailureKind::Rejected => ExportError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        },
        FailureKind::NotFound => ExportError::Api {
            message: format!(
                "{operation} failed: repository not found or not visible to this token ({message})"
            ),
        },
        _ => ExportError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        },
    }
}

fn map_client_error(operation: &str, kind: FailureKind, error: &octocrab::Error) -> ExportError {
    match kind {
        FailureKind::Transport => ExportError::Network {
            message: format!("{operation} failed: {error}"),
        },
        FailureKind::Decode => ExportError::Api {
            message: format!("{operation} returned a malformed record: {error}"),
        },
        _ => ExportError::Api {
            message: format!("{operation} failed: {error}"),
        },
    }
}
