use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("tutorly")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("alert"))
        .stdout(predicate::str::contains("confirm"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_alert_help_shows_kind() {
    cargo_bin_cmd!("tutorly")
        .args(["alert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--kind"))
        .stdout(predicate::str::contains("--width"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("tutorly")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_demo_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("tutorly")
        .env("TUTORLY_HOME", dir.path())
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
