// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use file_mover::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    logging::init(config.log_level);

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
