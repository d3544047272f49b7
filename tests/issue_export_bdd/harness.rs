//! JSON fixtures served by the mock GitHub API.

use serde_json::json;

pub(crate) const ISSUES_PATH: &str = "/api/v3/repos/owner/repo/issues";
pub(crate) const EXPECTED_RATE_LIMIT_RESET_AT: u64 = 1_700_000_000;

pub(crate) fn issue_json(number: u64, labels: &[&str], comments: u64) -> serde_json::Value {
    let labels: Vec<serde_json::Value> = labels
        .iter()
        .map(|name| json!({ "name": name }))
        .collect();
    json!({
        "number": number,
        "title": format!("Issue #{number}"),
        "body": format!("Details for #{number}"),
        "state": "open",
        "user": { "login": "reporter" },
        "labels": labels,
        "comments": comments,
        "created_at": "2021-03-05T14:07:00Z",
        "updated_at": "2021-03-06T08:30:00Z"
    })
}

pub(crate) fn pull_request_json(number: u64) -> serde_json::Value {
    let mut record = issue_json(number, &[], 0);
    if let Some(object) = record.as_object_mut() {
        object.insert(
            "pull_request".to_owned(),
            json!({ "url": format!("https://api.github.com/repos/owner/repo/pulls/{number}") }),
        );
    }
    record
}

pub(crate) fn comment_json(id: u64, author: &str, body: &str) -> serde_json::Value {
    json!({
        "id": id,
        "body": body,
        "user": { "login": author },
        "created_at": "2021-03-05T15:00:00Z"
    })
}
