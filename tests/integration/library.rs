// tests/integration/library.rs
use std::fs;

use file_mover::{
    app,
    config::{Config, LogLevel, OutputFormat},
};
use file_mover_domain::{TransferEvent, TransferRequest};
use file_mover_infra::LocalFileSystem;
use file_mover_ports::observer::NullObserver;
use file_mover_shared_kernel::{FileMoverError, TransferError};
use file_mover_usecase::TransferDirectory;

#[path = "../common/mod.rs"]
mod common;
use common::TransferWorkspace;

fn config_for(ws: &TransferWorkspace, format: OutputFormat) -> Config {
    Config {
        source: ws.source().display().to_string(),
        destination: ws.destination().display().to_string(),
        format,
        output: Some(ws.root().join("report")),
        log_level: LogLevel::Warn,
    }
}

#[test]
fn byte_total_matches_sum_of_moved_files() {
    let ws = TransferWorkspace::new();
    let sizes = [0usize, 1, 4096, 1 << 20];
    for (i, len) in sizes.iter().enumerate() {
        ws.add_source(&format!("f{i}.bin"), *len);
    }

    let outcome = app::run(&config_for(&ws, OutputFormat::Json)).expect("run succeeds");

    assert_eq!(outcome.files_transferred, sizes.len() as u64);
    assert_eq!(outcome.total_bytes.bytes(), sizes.iter().sum::<usize>() as u64);
    assert!(ws.source_names().is_empty());
    assert_eq!(ws.destination_names().len(), sizes.len());
    assert_eq!(outcome.log.last().unwrap().to_string(), "Total size of copied files: 1.00 MB.");
}

#[test]
fn missing_paths_surface_as_transfer_error() {
    let ws = TransferWorkspace::new();
    let mut config = config_for(&ws, OutputFormat::Text);
    config.destination = "  ".into();

    let err = app::run(&config).unwrap_err();

    assert!(matches!(err, FileMoverError::Transfer(TransferError::MissingPath)));
    assert!(!ws.root().join("report").exists());
}

#[test]
fn use_case_runs_against_the_real_filesystem() {
    let ws = TransferWorkspace::new();
    ws.add_source("notes.md", 7);
    ws.add_source("IMG_0001.JPG", 3);
    ws.add_destination("notes.md", "older");
    let request = TransferRequest::new(
        &ws.source().display().to_string(),
        &ws.destination().display().to_string(),
    )
    .unwrap();

    let fs_adapter = LocalFileSystem::new();
    let outcome = TransferDirectory::new(&fs_adapter, &NullObserver).run(&request).unwrap();

    assert_eq!(outcome.files_transferred, 1);
    assert_eq!(outcome.total_bytes.bytes(), 3);
    assert!(outcome.log.contains(&TransferEvent::DuplicateSkipped { base_name: "notes".into() }));
    assert_eq!(ws.source_names(), ["notes.md"]);
    assert_eq!(fs::read_to_string(ws.destination().join("notes.md")).unwrap(), "older");
}
