use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal dashboard for LeetCode problem-solving stats",
        ));
}

#[test]
fn test_cli_help_documents_username_argument() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USERNAME").or(predicate::str::contains("[USERNAME]")));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("leetui"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    cargo_bin_cmd!().arg("--bogus").assert().failure();
}
