//! Authenticated Octocrab client bound to one repository host.

use http::{HeaderName, Uri};
use octocrab::Octocrab;

use crate::github::error::ExportError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

use super::error_mapping::map_octocrab_error;

/// REST API version pinned on every request.
pub(super) const API_VERSION: &str = "2022-11-28";

const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-github-api-version");

/// Builds a client for `locator`'s API base that sends `token` and the pinned
/// API version with each request.
///
/// # Errors
///
/// Returns `ExportError::InvalidUrl` when the API base is not a valid URI or
/// `ExportError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    locator: &RepositoryLocator,
) -> Result<Octocrab, ExportError> {
    let base_uri: Uri = locator
        .api_base()
        .as_str()
        .parse()
        .map_err(|error: http::uri::InvalidUri| ExportError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.value().to_owned())
        .add_header(API_VERSION_HEADER, API_VERSION.to_owned())
        .base_uri(base_uri)
        .map_err(|error| ExportError::InvalidUrl(format!("rejected API base: {error}")))?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
