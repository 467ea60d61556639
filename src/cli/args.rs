// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_mover",
    version = crate::VERSION,
    about = "Move files from one directory into another, skipping names that already exist there"
)]
pub struct Args {
    /// Directory whose top-level files are moved
    #[arg(value_hint = ValueHint::DirPath)]
    pub source: String,

    /// Directory the files are moved into (created if missing)
    #[arg(value_hint = ValueHint::DirPath)]
    pub destination: String,

    /// Report format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Diagnostics")]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Diagnostics")]
    pub quiet: bool,
}
