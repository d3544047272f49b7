//! Ferry library crate exporting GitHub issues to fixed-width CSV.
//!
//! The library wraps Octocrab to page through a repository's issues, resolves
//! each issue's comments with bounded concurrency, and formats one CSV row
//! per issue. Pull requests returned by the issues endpoint are skipped.
//!
//! ```no_run
//! use ferry::export::{CsvSink, ExportLayout, IssueExport};
//! use ferry::{ListIssuesParams, OctocrabIssueGateway, PersonalAccessToken, RepositoryLocator};
//!
//! # async fn demo() -> Result<(), ferry::ExportError> {
//! let locator = RepositoryLocator::from_owner_repo("octocat", "hello-world")?;
//! let token = PersonalAccessToken::new("ghp_example")?;
//! let gateway = OctocrabIssueGateway::for_token(&token, &locator)?;
//!
//! let mut sink = CsvSink::new(std::io::stdout());
//! let summary = IssueExport::new(&gateway, ExportLayout::default())
//!     .run(&locator, &ListIssuesParams::default(), &mut sink)
//!     .await?;
//! assert!(summary.pages >= 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod export;
pub mod github;

pub use config::FerryConfig;
pub use export::{CsvSink, ExportLayout, ExportSummary, IssueExport, RowSink};
pub use github::{
    ExportError, Issue, IssueComment, IssueState, ListIssuesParams, OctocrabIssueGateway,
    PaginatedIssues, PersonalAccessToken, RepositoryLocator,
};
