//! Column layout shared by the header and every data row.

/// Default number of label columns, provenance tag included.
pub const NUM_OF_LABELS: usize = 5;

/// Default number of comment columns.
pub const NUM_OF_COMMENTS: usize = 50;

/// Default value of the `Type` column.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// Default tag placed in the first label column of every row.
pub const DEFAULT_PROVENANCE_TAG: &str = "fromGithub";

/// Headers of the fixed columns that precede labels and comments.
pub const BASE_HEADERS: [&str; 8] = [
    "ID",
    "Summary",
    "Description",
    "Date created",
    "Date modified",
    "Status",
    "Reporter",
    "Type",
];

/// Shape of the exported table.
///
/// Labels are padded to `max_labels` but never truncated. Comments are
/// truncated to `max_comments` and padded only when `pad_comments` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    /// Number of label columns, provenance tag included.
    pub max_labels: usize,
    /// Number of comment columns.
    pub max_comments: usize,
    /// Literal written to the `Type` column.
    pub issue_type: String,
    /// Tag written to the first label column.
    pub provenance_tag: String,
    /// Pads short comment lists with empty cells up to `max_comments`.
    pub pad_comments: bool,
}

impl ExportLayout {
    /// Number of cells in the header row.
    #[must_use]
    pub const fn header_width(&self) -> usize {
        BASE_HEADERS.len() + self.max_labels + self.max_comments
    }
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            max_labels: NUM_OF_LABELS,
            max_comments: NUM_OF_COMMENTS,
            issue_type: DEFAULT_ISSUE_TYPE.to_owned(),
            provenance_tag: DEFAULT_PROVENANCE_TAG.to_owned(),
            pad_comments: false,
        }
    }
}
