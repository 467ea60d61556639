// tests/integration/end_to_end.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TransferWorkspace;

fn file_mover() -> Command {
    Command::new(env!("CARGO_BIN_EXE_file_mover"))
}

#[test]
fn moves_all_files_into_a_new_destination() {
    let ws = TransferWorkspace::new();
    ws.add_source("a.txt", 10);
    ws.add_source("b.txt", 20);

    file_mover()
        .arg(ws.source())
        .arg(ws.destination())
        .assert()
        .success()
        .stdout(
            "Starting file transfer...\n\
             2 files copied and deleted successfully.\n\
             Total size of copied files: 0.00 MB.\n",
        );

    assert!(ws.source_names().is_empty());
    assert_eq!(ws.destination_names(), ["a.txt", "b.txt"]);
    assert_eq!(fs::metadata(ws.destination().join("b.txt")).unwrap().len(), 20);
}

#[test]
fn duplicate_stays_in_source_and_is_reported() {
    let ws = TransferWorkspace::new();
    ws.add_source("a.txt", 10);
    ws.add_destination("a.txt", "original");

    file_mover()
        .arg(ws.source())
        .arg(ws.destination())
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate file found: a. Skipped."))
        .stdout(predicate::str::contains("0 files copied and deleted successfully."));

    assert_eq!(ws.source_names(), ["a.txt"]);
    assert_eq!(fs::read_to_string(ws.destination().join("a.txt")).unwrap(), "original");
}

#[test]
fn blank_paths_touch_nothing() {
    let ws = TransferWorkspace::new();
    ws.add_source("a.txt", 1);

    file_mover()
        .arg("   ")
        .arg(ws.destination())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please select both source and destination directories."));

    file_mover().args([" \t", "  "]).assert().failure();

    assert!(!ws.destination().exists());
    assert_eq!(ws.source_names(), ["a.txt"]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let ws = TransferWorkspace::new();
    ws.add_source("a.txt", 3);

    file_mover()
        .arg(format!("  {}  ", ws.source().display()))
        .arg(format!("\t{}\n", ws.destination().display()))
        .assert()
        .success();

    assert_eq!(ws.destination_names(), ["a.txt"]);
}

#[test]
fn creates_missing_parent_directories() {
    let ws = TransferWorkspace::new();
    ws.add_source("photo.jpg", 5);
    let nested = ws.root().join("deep").join("er").join("dest");

    file_mover().arg(ws.source()).arg(&nested).assert().success();

    assert!(nested.join("photo.jpg").is_file());
}

#[test]
fn subdirectories_are_left_alone() {
    let ws = TransferWorkspace::new();
    ws.add_source("top.txt", 2);
    fs::create_dir(ws.source().join("album")).unwrap();
    fs::write(ws.source().join("album").join("inner.txt"), "x").unwrap();

    file_mover()
        .arg(ws.source())
        .arg(ws.destination())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files copied and deleted successfully."));

    assert_eq!(ws.source_names(), ["album"]);
    assert!(ws.source().join("album").join("inner.txt").is_file());
    assert_eq!(ws.destination_names(), ["top.txt"]);
}

#[test]
fn missing_source_is_reported_without_summary() {
    let ws = TransferWorkspace::new();
    let absent = ws.root().join("no-such-source");

    file_mover()
        .arg(&absent)
        .arg(ws.destination())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Starting file transfer...\n"))
        .stdout(predicate::str::contains("An unexpected error occurred: "))
        .stdout(predicate::str::contains("files copied and deleted successfully").not());

    assert!(ws.destination().is_dir());
}

#[test]
fn destination_that_is_a_file_aborts() {
    let ws = TransferWorkspace::new();
    ws.add_source("a.txt", 1);
    let blocker = ws.root().join("blocker");
    fs::write(&blocker, "not a dir").unwrap();

    file_mover()
        .arg(ws.source())
        .arg(&blocker)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is unavailable"));

    assert_eq!(ws.source_names(), ["a.txt"]);
}

#[test]
fn second_run_skips_everything_already_moved() {
    let ws = TransferWorkspace::new();
    ws.add_source("a.txt", 4);
    file_mover().arg(ws.source()).arg(ws.destination()).assert().success();

    ws.add_source("a.txt", 9);
    file_mover()
        .arg(ws.source())
        .arg(ws.destination())
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate file found: a. Skipped."));

    assert_eq!(fs::metadata(ws.destination().join("a.txt")).unwrap().len(), 4);
    assert_eq!(ws.source_names(), ["a.txt"]);
}
