//! Layer precedence tests.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"owner": "default-owner"})), ("file", json!({"owner": "file-owner"}))],
    "file-owner",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"owner": "file-owner"})), ("environment", json!({"owner": "env-owner"}))],
    "env-owner",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"owner": "env-owner"})), ("cli", json!({"owner": "cli-owner"}))],
    "cli-owner",
    "CLI should override environment"
)]
fn owner_follows_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    assert_eq!(config.owner.as_deref(), Some(expected), "{message}");
}

#[rstest]
fn full_precedence_chain() {
    let config = build_config_from_layers(&[
        ("defaults", json!({"repo": "default", "max_comments": 50})),
        ("file", json!({"repo": "file", "max_comments": 10})),
        ("environment", json!({"repo": "env"})),
        ("cli", json!({"repo": "cli"})),
    ]);

    assert_eq!(config.repo.as_deref(), Some("cli"), "CLI wins for repo");
    assert_eq!(
        config.max_comments, 10,
        "file wins for max_comments (no env/cli override)"
    );
}

#[rstest]
fn numeric_and_boolean_fields_merge() {
    let config = build_config_from_layers(&[
        ("file", json!({"page_size": 25, "pad_comments": true})),
        ("cli", json!({"concurrency": 2})),
    ]);

    assert_eq!(config.page_size, 25);
    assert!(config.pad_comments);
    assert_eq!(config.concurrency, 2);
}

#[rstest]
fn unset_fields_keep_struct_defaults() {
    let config = build_config_from_layers(&[("file", json!({"owner": "octo"}))]);

    assert_eq!(config.page_size, 100);
    assert_eq!(config.max_labels, 5);
    assert_eq!(config.max_comments, 50);
    assert_eq!(config.concurrency, 8);
    assert_eq!(config.issue_type, "Task");
    assert_eq!(config.provenance_tag, "fromGithub");
    assert!(!config.pad_comments);
    assert!(config.state.is_none());
}
