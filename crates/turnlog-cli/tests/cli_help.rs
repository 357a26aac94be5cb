use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("turnlog")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("cat"));
}

#[test]
fn test_view_help_shows_demo_flag() {
    cargo_bin_cmd!("turnlog")
        .args(["view", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--demo"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("turnlog")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
