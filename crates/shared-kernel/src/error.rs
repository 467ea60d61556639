// crates/shared-kernel/src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileMoverError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileMoverError>,
    },

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, FileMoverError>;

/// Failures of a directory transfer.
///
/// `MissingPath` and `DestinationUnavailable` abort the invocation before any
/// file is touched. The remaining variants are recorded in the transfer log
/// and never abort the batch.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Please select both source and destination directories.")]
    MissingPath,

    #[error("Destination directory '{path}' is unavailable: {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File not found: {path}")]
    FileMissing { path: PathBuf },

    #[error("An error occurred while processing the file: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An unexpected error occurred: {message}")]
    Unexpected { message: String },
}

pub type TransferResult<T> = std::result::Result<T, TransferError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File system operation failed: {operation} on '{path}': {source}")]
    FileSystemOperation {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list directory '{path}': {details}")]
    DirectoryListing { path: PathBuf, details: String },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    pub fn fs(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileSystemOperation { operation, path: path.into(), source }
    }

    /// The io error kind behind this failure, if there is one.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::FileSystemOperation { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Unwraps the io error, synthesizing one for variants that do not carry it.
    #[must_use]
    pub fn into_io(self) -> io::Error {
        match self {
            Self::FileSystemOperation { source, .. } => source,
            other => io::Error::other(other.to_string()),
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to write report to '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Report '{path}' would be inside the source directory '{directory}' and moved with it")]
    ReportInsideSource { path: PathBuf, directory: PathBuf },
}

impl From<io::Error> for InfrastructureError {
    fn from(err: io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<io::Error> for FileMoverError {
    fn from(err: io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FileMoverError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FileMoverError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileMoverError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileMoverError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileMoverError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
