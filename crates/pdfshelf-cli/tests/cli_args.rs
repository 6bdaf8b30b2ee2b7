use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdfshelf").unwrap()
}

#[test]
fn help_flag_prints_usage_with_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--simple"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn version_flag_prints_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdfshelf"));
}

#[test]
fn no_args_shows_usage_error() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn dir_argument_is_required() {
    cmd()
        .arg("--simple")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dir"));
}

#[test]
fn unknown_flag_is_rejected() {
    cmd()
        .args(["--dir", ".", "--format", "json"])
        .assert()
        .failure();
}
