//! Argument-handling tests for the binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("planscrape").unwrap()
}

#[test]
fn no_args_shows_usage() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("links"));
}

#[test]
fn version_prints_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    cmd().arg("frobnicate").assert().failure();
}

#[test]
fn extract_requires_file_argument() {
    cmd().arg("extract").assert().failure();
}

#[test]
fn extract_rejects_unknown_format() {
    cmd()
        .args(["extract", "pages.json", "--format", "xml"])
        .assert()
        .failure();
}
