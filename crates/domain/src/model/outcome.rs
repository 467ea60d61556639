use std::path::PathBuf;

use chrono::{DateTime, Local};
use file_mover_shared_kernel::FileSize;
use serde::{Deserialize, Serialize};

use super::{TransferEvent, TransferRequest};

/// Result of a single transfer invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub files_transferred: u64,
    pub total_bytes: FileSize,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub log: Vec<TransferEvent>,
}

impl TransferOutcome {
    pub fn log_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.log.iter().map(ToString::to_string)
    }

    pub fn failures(&self) -> usize {
        self.log.iter().filter(|event| event.is_failure()).count()
    }
}

/// Accumulates events and counters while a batch runs.
#[derive(Debug)]
pub struct OutcomeRecorder {
    source: PathBuf,
    destination: PathBuf,
    started_at: DateTime<Local>,
    files_transferred: u64,
    total_bytes: FileSize,
    log: Vec<TransferEvent>,
}

impl OutcomeRecorder {
    pub fn start(request: &TransferRequest) -> Self {
        Self {
            source: request.source().to_path_buf(),
            destination: request.destination().to_path_buf(),
            started_at: Local::now(),
            files_transferred: 0,
            total_bytes: FileSize::zero(),
            log: Vec::new(),
        }
    }

    pub fn record(&mut self, event: TransferEvent) -> &TransferEvent {
        self.log.push(event);
        &self.log[self.log.len() - 1]
    }

    pub fn add_transferred(&mut self, size: FileSize) {
        self.files_transferred += 1;
        self.total_bytes = self.total_bytes + size;
    }

    pub fn files_transferred(&self) -> u64 {
        self.files_transferred
    }

    pub fn total_bytes(&self) -> FileSize {
        self.total_bytes
    }

    pub fn finish(self) -> TransferOutcome {
        TransferOutcome {
            source: self.source,
            destination: self.destination,
            files_transferred: self.files_transferred,
            total_bytes: self.total_bytes,
            started_at: self.started_at,
            finished_at: Local::now(),
            log: self.log,
        }
    }
}
