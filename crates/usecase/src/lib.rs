//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: moves the files of one directory into another
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::TransferDirectory;
