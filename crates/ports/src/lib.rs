//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: the file operations a transfer needs
//! - [`observer`]: receives transfer log entries as they are recorded
//!
//! These ports keep the use case independent of the real filesystem and of
//! how status lines are presented.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod observer;
