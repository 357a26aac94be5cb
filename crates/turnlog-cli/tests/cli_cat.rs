use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const SAMPLE: &str = r#"[
  {
    "timestamp": 1633036800.0,
    "user": "User1",
    "prompt": "Hello",
    "completion": "Hi there!"
  }
]"#;

#[test]
fn test_cat_prints_canonical_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.json");
    std::fs::write(&path, SAMPLE).unwrap();

    cargo_bin_cmd!("turnlog")
        .args(["cat", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"user\": \"User1\""))
        .stdout(predicate::str::contains("\"completion\": \"Hi there!\""));
}

#[test]
fn test_log_filter_env_enables_dispatch_event() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.json");
    std::fs::write(&path, SAMPLE).unwrap();

    cargo_bin_cmd!("turnlog")
        .env("TURNLOG_LOG", "info")
        .env_remove("TURNLOG_LOG_FILE")
        .args(["cat", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("dispatching"));
}

#[test]
fn test_cat_missing_file_fails_with_message() {
    cargo_bin_cmd!("turnlog")
        .args(["cat", "/nonexistent/log.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load transcript"));
}

#[test]
fn test_cat_rejects_malformed_turn() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[{"timestamp": 1.0, "user": "u"}]"#).unwrap();

    cargo_bin_cmd!("turnlog")
        .args(["cat", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing or invalid field"));
}
