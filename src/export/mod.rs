//! Fixed-width CSV export of repository issues.
//!
//! The pipeline has four parts:
//!
//! - [`IssueExport`] pulls listing pages sequentially and drops pull requests.
//! - [`comment_lines`] resolves each issue's comments, skipping the request
//!   for issues that report none.
//! - [`build_row`] formats one issue into base, label and comment cells.
//! - [`RowSink`] receives the header and every row; [`CsvSink`] writes them
//!   as CSV with every field quoted.
//!
//! # Layout
//!
//! Each row starts with eight fixed columns (`ID`, `Summary`, `Description`,
//! `Date created`, `Date modified`, `Status`, `Reporter`, `Type`). Label
//! columns follow, the first always holding the provenance tag, then one
//! column per comment. See [`ExportLayout`] for the capacities.

mod driver;
mod enrich;
mod layout;
mod record;
mod sink;

pub use driver::{DEFAULT_CONCURRENCY, ExportSummary, IssueExport};
pub use enrich::{comment_line, comment_lines};
pub use layout::{
    BASE_HEADERS, DEFAULT_ISSUE_TYPE, DEFAULT_PROVENANCE_TAG, ExportLayout, NUM_OF_COMMENTS,
    NUM_OF_LABELS,
};
pub use record::{
    DATE_FORMAT, build_row, comment_cells, format_date, headers, label_cells, label_identifier,
    pad_to,
};
pub use sink::{CsvSink, RowSink};
