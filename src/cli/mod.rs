//! CLI operation handlers.
//!
//! - [`export_issues`]: Export a repository's issues to CSV
//!
//! Output formatting utilities are in [`output`].

pub mod export_issues;
pub mod output;

#[cfg(test)]
pub mod test_utils;
