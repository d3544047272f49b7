//! Repository identity wrappers and API path construction.

use std::fmt;

use url::Url;

use super::error::ExportError;

/// Checks one `owner` or `repo` path segment.
///
/// Segments are trimmed; empty values count as missing and values that would
/// split into further path segments are rejected.
fn path_segment(kind: &str, value: &str) -> Result<String, ExportError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ExportError::MissingPathSegments);
    }
    if trimmed.contains(['/', '?', '#']) || trimmed.chars().any(char::is_whitespace) {
        return Err(ExportError::InvalidUrl(format!(
            "{kind} '{trimmed}' is not a single path segment"
        )));
    }
    Ok(trimmed.to_owned())
}

/// Login of the user or organisation owning the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ExportError> {
        path_segment("owner", value).map(Self)
    }

    /// Borrow the owner login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository name; also names the default output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ExportError> {
        path_segment("repository", value).map(Self)
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ExportError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExportError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub API base URL from a parsed repository URL.
///
/// `github.com` maps to the public API; any other host is treated as GitHub
/// Enterprise and served from `<host>/api/v3`.
fn derive_api_base(parsed: &Url) -> Result<Url, ExportError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| ExportError::InvalidUrl("URL must include a host".to_owned()))?;

    if host.eq_ignore_ascii_case("github.com") {
        return Url::parse("https://api.github.com")
            .map_err(|error| ExportError::InvalidUrl(error.to_string()));
    }

    let authority = if host.contains(':') {
        format!("[{host}]")
    } else {
        host.to_owned()
    };
    let mut api_url = Url::parse(&format!("{}://{authority}", parsed.scheme()))
        .map_err(|error| ExportError::InvalidUrl(error.to_string()))?;

    api_url
        .set_port(parsed.port())
        .map_err(|()| ExportError::InvalidUrl("invalid port".to_owned()))?;
    api_url.set_path("api/v3");
    Ok(api_url)
}

/// Repository whose issue tracker is exported, plus its API base.
///
/// # Example
///
/// ```
/// use ferry::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("https://github.com/octo/repo")
///     .expect("should parse repository URL");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for a `github.com` repository.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::MissingPathSegments` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, ExportError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let api_base = Url::parse("https://api.github.com")
            .map_err(|error| ExportError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Parses a repository URL in the form `https://<host>/<owner>/<repo>`.
    ///
    /// Trailing path segments (such as `/issues`) and a `.git` suffix on the
    /// repository name are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidUrl` when parsing fails or
    /// `MissingPathSegments` when the URL path lacks owner and repository.
    pub fn parse(input: &str) -> Result<Self, ExportError> {
        let parsed =
            Url::parse(input).map_err(|error| ExportError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(ExportError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(ExportError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(ExportError::MissingPathSegments)?;
        let repository_name = repository_segment
            .strip_suffix(".git")
            .unwrap_or(repository_segment);

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_name)?;
        let api_base = derive_api_base(&parsed)?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// API base URL derived from the repository host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Returns the API path for listing the repository's issues.
    pub(crate) fn issues_path(&self) -> String {
        format!("/repos/{}/{}/issues", self.owner, self.repository)
    }

    /// Returns the API path for listing comments on one issue.
    pub(crate) fn issue_comments_path(&self, number: u64) -> String {
        format!("{}/{number}/comments", self.issues_path())
    }
}
