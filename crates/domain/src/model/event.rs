use std::{fmt, path::PathBuf};

use file_mover_shared_kernel::{FileSize, TransferError};
use serde::{Deserialize, Serialize};

/// One entry of the transfer log. `Display` renders the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferEvent {
    Started,
    DuplicateSkipped { base_name: String },
    FileMissing { path: PathBuf },
    FileFailed { path: PathBuf, message: String },
    FilesTransferred { count: u64 },
    TotalSize { size: FileSize },
    Unexpected { message: String },
}

impl TransferEvent {
    /// Whether this entry reports a failure of some kind.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::FileMissing { .. } | Self::FileFailed { .. } | Self::Unexpected { .. })
    }
}

impl From<TransferError> for TransferEvent {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::FileMissing { path } => Self::FileMissing { path },
            TransferError::FileIo { path, source } => Self::FileFailed { path, message: source.to_string() },
            other => Self::Unexpected { message: unexpected_message(&other) },
        }
    }
}

fn unexpected_message(err: &TransferError) -> String {
    match err {
        TransferError::Unexpected { message } => message.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for TransferEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => f.write_str("Starting file transfer..."),
            Self::DuplicateSkipped { base_name } => write!(f, "Duplicate file found: {base_name}. Skipped."),
            Self::FileMissing { path } => write!(f, "File not found: {}", path.display()),
            Self::FileFailed { message, .. } => {
                write!(f, "An error occurred while processing the file: {message}")
            }
            Self::FilesTransferred { count } => write!(f, "{count} files copied and deleted successfully."),
            Self::TotalSize { size } => {
                write!(f, "Total size of copied files: {}.", size.to_transfer_unit())
            }
            Self::Unexpected { message } => write!(f, "An unexpected error occurred: {message}"),
        }
    }
}
