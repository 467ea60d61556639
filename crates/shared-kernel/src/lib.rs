// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, FileMoverError, InfraResult, InfrastructureError, PresentationError, Result,
    TransferError, TransferResult,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileSize, ScaledSize, SizeUnit};
