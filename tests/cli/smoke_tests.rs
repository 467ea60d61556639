use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_file_mover"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file_mover"))
        .stdout(predicate::str::contains("<SOURCE>"))
        .stdout(predicate::str::contains("<DESTINATION>"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_file_mover"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_positional_is_a_usage_error() {
    Command::new(env!("CARGO_BIN_EXE_file_mover")).arg("only-source").assert().code(2);
}

#[test]
fn unknown_format_is_rejected() {
    Command::new(env!("CARGO_BIN_EXE_file_mover"))
        .args(["--format", "xml", "a", "b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}
