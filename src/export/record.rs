//! Row construction for the issue export.
//!
//! Every function here is pure: the enricher resolves comments first, then
//! [`build_row`] turns one issue and its comment strings into the ordered
//! cells of one output row.

use chrono::{DateTime, Utc};

use crate::github::{ExportError, Issue};

use super::layout::{BASE_HEADERS, ExportLayout};

/// Output pattern for the `Date created` and `Date modified` columns.
pub const DATE_FORMAT: &str = "%d-%m-%y %H:%M";

const LABEL_HEADER: &str = "Label";
const COMMENT_HEADER: &str = "Comment";

/// Returns the header row for `layout`.
///
/// # Examples
///
/// ```
/// use ferry::export::{ExportLayout, headers};
///
/// let row = headers(&ExportLayout::default());
/// assert_eq!(row.len(), 8 + 5 + 50);
/// assert_eq!(row.first().map(String::as_str), Some("ID"));
/// ```
#[must_use]
pub fn headers(layout: &ExportLayout) -> Vec<String> {
    let mut row = Vec::with_capacity(layout.header_width());
    row.extend(BASE_HEADERS.iter().map(|header| (*header).to_owned()));
    row.extend(std::iter::repeat_n(LABEL_HEADER.to_owned(), layout.max_labels));
    row.extend(std::iter::repeat_n(
        COMMENT_HEADER.to_owned(),
        layout.max_comments,
    ));
    row
}

/// Builds the output row for `issue` from its resolved comment strings.
///
/// # Errors
///
/// Returns [`ExportError::InvalidTimestamp`] when either issue timestamp is
/// not valid RFC 3339.
pub fn build_row(
    issue: &Issue,
    comments: Vec<String>,
    layout: &ExportLayout,
) -> Result<Vec<String>, ExportError> {
    let mut row = Vec::with_capacity(layout.header_width());
    row.push(issue.number.to_string());
    row.push(issue.title.clone());
    row.push(issue.body.clone());
    row.push(format_date(&issue.created_at)?);
    row.push(format_date(&issue.updated_at)?);
    row.push(issue.state.clone());
    row.push(issue.reporter.clone());
    row.push(layout.issue_type.clone());
    row.extend(label_cells(&issue.labels, layout));
    row.extend(comment_cells(comments, layout));
    Ok(row)
}

/// Renders an RFC 3339 timestamp as `dd-mm-yy HH:MM` in UTC.
///
/// # Errors
///
/// Returns [`ExportError::InvalidTimestamp`] when `raw` does not parse.
///
/// # Examples
///
/// ```
/// use ferry::export::format_date;
///
/// assert_eq!(format_date("2021-03-05T14:07:00Z").ok().as_deref(), Some("05-03-21 14:07"));
/// ```
pub fn format_date(raw: &str) -> Result<String, ExportError> {
    let parsed = DateTime::parse_from_rfc3339(raw).map_err(|error| {
        ExportError::InvalidTimestamp {
            message: format!("'{raw}': {error}"),
        }
    })?;
    Ok(parsed.with_timezone(&Utc).format(DATE_FORMAT).to_string())
}

/// Converts a label name into an upper camel case identifier.
///
/// The name is split on every non-alphanumeric character and at camel case
/// boundaries; each word is lowercased and then capitalised, so `WIP` becomes
/// `Wip` and `needsReview` becomes `NeedsReview`.
#[must_use]
pub fn label_identifier(name: &str) -> String {
    name.split(|ch: char| !ch.is_alphanumeric())
        .flat_map(camel_words)
        .map(capitalise)
        .collect()
}

/// Splits `word` where a lowercase letter meets an uppercase one, and before
/// the last capital of an acronym that runs into a lowercase tail
/// (`XMLHttp` gives `XML` and `Http`).
fn camel_words(word: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut before_previous: Option<char> = None;
    let mut previous: Option<(usize, char)> = None;

    for (index, ch) in word.char_indices() {
        let boundary = match (before_previous, previous) {
            (_, Some((_, prev))) if prev.is_lowercase() && ch.is_uppercase() => Some(index),
            (Some(earlier), Some((prev_index, prev)))
                if earlier.is_uppercase() && prev.is_uppercase() && ch.is_lowercase() =>
            {
                Some(prev_index)
            }
            _ => None,
        };
        if let Some(split) = boundary.filter(|&split| split > start) {
            words.extend(word.get(start..split));
            start = split;
        }
        before_previous = previous.map(|(_, prev)| prev);
        previous = Some((index, ch));
    }

    words.extend(word.get(start..).filter(|rest| !rest.is_empty()));
    words
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Label cells: provenance tag first, then each label identifier, padded to
/// `max_labels`. Longer lists are kept whole.
#[must_use]
pub fn label_cells(labels: &[String], layout: &ExportLayout) -> Vec<String> {
    let mut cells = Vec::with_capacity(layout.max_labels.max(labels.len() + 1));
    cells.push(layout.provenance_tag.clone());
    cells.extend(labels.iter().map(|label| label_identifier(label)));
    pad_to(&mut cells, layout.max_labels);
    cells
}

/// Comment cells: truncated to `max_comments`, padded only when the layout
/// asks for it.
#[must_use]
pub fn comment_cells(mut comments: Vec<String>, layout: &ExportLayout) -> Vec<String> {
    comments.truncate(layout.max_comments);
    if layout.pad_comments {
        pad_to(&mut comments, layout.max_comments);
    }
    comments
}

/// Appends empty cells until `cells` holds at least `width` entries.
pub fn pad_to(cells: &mut Vec<String>, width: usize) {
    if cells.len() < width {
        cells.resize(width, String::new());
    }
}
