//! Support modules for the issue export BDD tests.

pub(crate) mod domain;
pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use domain::{CellCount, IssueCount, RowCount, RowIndex};
pub(crate) use harness::{
    EXPECTED_RATE_LIMIT_RESET_AT, ISSUES_PATH, comment_json, issue_json, pull_request_json,
};
pub(crate) use state::{ExportState, mount_mock, run_issue_export, server_uri};
