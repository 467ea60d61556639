use std::path::{Path, PathBuf};

use file_mover_shared_kernel::{TransferError, TransferResult};
use serde::{Deserialize, Serialize};

/// A validated pair of directories to move files between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    source: PathBuf,
    destination: PathBuf,
}

impl TransferRequest {
    /// Trims both inputs; either one ending up empty is a `MissingPath`.
    pub fn new(source: &str, destination: &str) -> TransferResult<Self> {
        let source = source.trim();
        let destination = destination.trim();
        if source.is_empty() || destination.is_empty() {
            return Err(TransferError::MissingPath);
        }
        Ok(Self { source: PathBuf::from(source), destination: PathBuf::from(destination) })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
