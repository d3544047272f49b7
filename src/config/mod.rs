//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.ferry.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `FERRY_*`, plus the `GITHUB_TOKEN` fallback
//!    for the token
//! 4. **Command-line arguments** – `--owner`/`-o`, `--repo`/`-r`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! owner = "octocat"
//! repo = "hello-world"
//! token = "ghp_example"
//! state = "open"
//! max_comments = 20
//! output = "hello-world.csv"
//! ```

use std::env;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::export::{
    DEFAULT_CONCURRENCY, DEFAULT_ISSUE_TYPE, DEFAULT_PROVENANCE_TAG, ExportLayout,
    NUM_OF_COMMENTS, NUM_OF_LABELS,
};
use crate::github::error::ExportError;
use crate::github::{IssueState, ListIssuesParams, MAX_PER_PAGE, RepositoryLocator};

/// Value of `output` that selects standard output.
pub const STDOUT_MARKER: &str = "-";

/// Where the exported CSV is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Standard output.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl fmt::Display for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("standard output"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `FERRY_OWNER` / `FERRY_REPO` or `--owner` / `--repo`: Repository to
///   export
/// - `FERRY_REPO_URL` or `--repo-url`: Repository URL, for GitHub Enterprise
///   hosts
/// - `FERRY_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `FERRY_STATE` or `--state`: `open`, `closed` or `all`
/// - `FERRY_OUTPUT` or `--output`: Destination path, `-` for stdout
///
/// # Example
///
/// ```no_run
/// use ferry::FerryConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = FerryConfig::load().expect("failed to load configuration");
/// let locator = config.repository_locator().expect("repository required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FERRY",
    discovery(
        dotfile_name = ".ferry.toml",
        config_file_name = "ferry.toml",
        app_name = "ferry"
    )
)]
pub struct FerryConfig {
    /// Repository owner (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Repository URL such as `https://ghe.example.com/owner/repo`.
    ///
    /// Takes the place of `owner` and `repo`; the API base is derived from
    /// the host.
    #[ortho_config(cli_short = 'u')]
    pub repo_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Falls back to `GITHUB_TOKEN` when no other source provides one.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Issue state filter; defaults to `all`.
    #[ortho_config(cli_short = 's')]
    pub state: Option<String>,

    /// Issues requested per listing page (1 to 100).
    #[ortho_config()]
    pub page_size: u8,

    /// Label columns per row, provenance tag included.
    #[ortho_config()]
    pub max_labels: usize,

    /// Comment columns per row; longer comment lists are truncated.
    #[ortho_config()]
    pub max_comments: usize,

    /// Comment requests allowed in flight within one page.
    #[ortho_config()]
    pub concurrency: usize,

    /// Output path; `-` writes to stdout. Defaults to `<repo>-issues.csv`.
    #[ortho_config(cli_short = 'f')]
    pub output: Option<String>,

    /// Value written to the `Type` column.
    #[ortho_config()]
    pub issue_type: String,

    /// Tag written to the first label column of every row.
    #[ortho_config()]
    pub provenance_tag: String,

    /// Pads comment columns with empty cells up to `max_comments`.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment; use the CLI flag or the configuration file.
    #[ortho_config()]
    pub pad_comments: bool,
}

impl Default for FerryConfig {
    fn default() -> Self {
        Self {
            owner: None,
            repo: None,
            repo_url: None,
            token: None,
            state: None,
            page_size: MAX_PER_PAGE,
            max_labels: NUM_OF_LABELS,
            max_comments: NUM_OF_COMMENTS,
            concurrency: DEFAULT_CONCURRENCY.get(),
            output: None,
            issue_type: DEFAULT_ISSUE_TYPE.to_owned(),
            provenance_tag: DEFAULT_PROVENANCE_TAG.to_owned(),
            pad_comments: false,
        }
    }
}

impl FerryConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, ExportError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ExportError::MissingToken)
    }

    /// Resolves the repository to export from `repo_url` or `owner`/`repo`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::MissingRepository`] when neither form is
    /// complete, or the locator's parse error for malformed values.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, ExportError> {
        if let Some(url) = self.repo_url.as_deref() {
            return RepositoryLocator::parse(url);
        }

        match (self.owner.as_deref(), self.repo.as_deref()) {
            (Some(owner), Some(repo)) => RepositoryLocator::from_owner_repo(owner, repo),
            (None, _) => Err(ExportError::MissingRepository {
                message: "repository owner is required (use --owner or --repo-url)".to_owned(),
            }),
            (_, None) => Err(ExportError::MissingRepository {
                message: "repository name is required (use --repo or --repo-url)".to_owned(),
            }),
        }
    }

    /// Returns the configured state filter, `all` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Configuration`] for unknown states.
    pub fn issue_state(&self) -> Result<IssueState, ExportError> {
        self.state
            .as_deref()
            .map_or_else(|| Ok(IssueState::default()), str::parse)
    }

    /// Builds the request for the first listing page.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Configuration`] for unknown states.
    pub fn listing_params(&self) -> Result<ListIssuesParams, ExportError> {
        Ok(ListIssuesParams {
            state: self.issue_state()?,
            page: 1,
            per_page: self.page_size,
        })
    }

    /// Returns the column layout described by this configuration.
    #[must_use]
    pub fn export_layout(&self) -> ExportLayout {
        ExportLayout {
            max_labels: self.max_labels,
            max_comments: self.max_comments,
            issue_type: self.issue_type.clone(),
            provenance_tag: self.provenance_tag.clone(),
            pad_comments: self.pad_comments,
        }
    }

    /// Returns the comment fetch bound.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Configuration`] when `concurrency` is zero.
    pub fn concurrency_limit(&self) -> Result<NonZeroUsize, ExportError> {
        NonZeroUsize::new(self.concurrency).ok_or_else(|| ExportError::Configuration {
            message: "concurrency must be at least 1".to_owned(),
        })
    }

    /// Resolves where the CSV goes for `locator`'s repository.
    #[must_use]
    pub fn output_destination(&self, locator: &RepositoryLocator) -> OutputDestination {
        match self.output.as_deref() {
            Some(STDOUT_MARKER) => OutputDestination::Stdout,
            Some(path) => OutputDestination::File(PathBuf::from(path)),
            None => OutputDestination::File(PathBuf::from(format!(
                "{}-issues.csv",
                locator.repository().as_str()
            ))),
        }
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Configuration`] when `repo_url` is combined
    /// with `owner`/`repo`, when a numeric option is out of range, or when
    /// the state filter is unknown.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.repo_url.is_some() && (self.owner.is_some() || self.repo.is_some()) {
            return Err(ExportError::Configuration {
                message: "--repo-url cannot be combined with --owner or --repo".to_owned(),
            });
        }

        if self.page_size == 0 || self.page_size > MAX_PER_PAGE {
            return Err(ExportError::Configuration {
                message: format!(
                    "page_size must be between 1 and {MAX_PER_PAGE}, got {}",
                    self.page_size
                ),
            });
        }

        if self.max_labels == 0 {
            return Err(ExportError::Configuration {
                message: "max_labels must be at least 1 to hold the provenance tag".to_owned(),
            });
        }

        self.concurrency_limit()?;
        self.issue_state()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
