// src/config.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::Args;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Status lines, streamed while the batch runs.
    #[default]
    Text,
    Json,
    Yaml,
}

/// Diagnostic verbosity for the stderr logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Error;
        }
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raw, untrimmed; validation happens when the transfer request is built.
    pub source: String,
    pub destination: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            source: args.source,
            destination: args.destination,
            format: args.format.into(),
            output: args.output,
            log_level: LogLevel::from_flags(args.verbose, args.quiet),
        }
    }
}
