#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod naming;

pub use model::{OutcomeRecorder, TransferEvent, TransferOutcome, TransferRequest};
