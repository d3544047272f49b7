//! Error types exposed by the GitHub gateway and the export pipeline.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while configuring an export, talking to GitHub, or writing
/// rows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The provided URL could not be parsed.
    #[error("repository URL is invalid: {0}")]
    InvalidUrl(String),

    /// The repository path is incomplete.
    #[error("repository URL must match /owner/repo")]
    MissingPathSegments,

    /// Neither `owner`/`repo` nor `repo_url` was configured.
    #[error("repository is required: {message}")]
    MissingRepository {
        /// Which part of the repository identity is missing.
        message: String,
    },

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error, or a response that did
    /// not match the expected shape.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body or decode failure describing the problem.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit
    /// message. Reported only; the export does not back off and retry.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// A timestamp could not be rendered in the output date pattern.
    #[error("invalid timestamp: {message}")]
    InvalidTimestamp {
        /// The offending value and parse detail.
        message: String,
    },

    /// Writing the export destination failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O or CSV operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        Self::Io {
            message: format!("CSV write failed: {error}"),
        }
    }
}
