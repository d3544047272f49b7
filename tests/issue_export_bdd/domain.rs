//! Domain wrapper types for the issue export BDD tests.

use std::fmt;
use std::str::FromStr;

/// Number of issues (or pull requests) served by a mock page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IssueCount(u64);

impl IssueCount {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for IssueCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl fmt::Display for IssueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of data rows in the exported table, header excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowCount(usize);

impl RowCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for RowCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>().map(Self)
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based index of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowIndex(usize);

impl RowIndex {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for RowIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<usize>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("RowIndex must be >= 1".to_owned());
        }

        Ok(Self(value))
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of cells in a row or row segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellCount(usize);

impl CellCount {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for CellCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>().map(Self)
    }
}

impl fmt::Display for CellCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
