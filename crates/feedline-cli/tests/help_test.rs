use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn feedline() -> Command {
    Command::cargo_bin("feedline").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    feedline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("posts"))
        .stdout(predicate::str::contains("--locale"));
}

#[test]
fn test_render_help() {
    feedline()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--now"))
        .stdout(predicate::str::contains("--compact"));
}

#[test]
fn test_version() {
    feedline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("feedline "));
}
