// src/app.rs
use std::io::Write;

use file_mover_domain::{TransferOutcome, TransferRequest};
use file_mover_infra::LocalFileSystem;
use file_mover_ports::observer::NullObserver;
use file_mover_shared_kernel::{ErrorContext, Result};
use file_mover_usecase::TransferDirectory;
use tracing::{debug, info};

use crate::{
    config::{Config, OutputFormat},
    presentation::{self, LineStreamer},
};

/// Validates the request, runs the batch and emits the report.
///
/// # Errors
///
/// Missing paths, an unavailable destination, or a report that cannot be
/// written. Per-file failures only show up in the returned log.
pub fn run(config: &Config) -> Result<TransferOutcome> {
    let request = TransferRequest::new(&config.source, &config.destination)?;
    let fs = LocalFileSystem::new();
    let sink = presentation::open_sink(config.output.as_deref(), request.source())?;
    debug!(format = ?config.format, output = ?config.output, "report configured");

    let outcome = match config.format {
        OutputFormat::Text => {
            let streamer = LineStreamer::new(sink);
            let outcome = TransferDirectory::new(&fs, &streamer).run(&request)?;
            streamer
                .into_inner()
                .flush()
                .with_context(|| format!("flushing report to {}", report_target(config)))?;
            outcome
        }
        format => {
            let outcome = TransferDirectory::new(&fs, &NullObserver).run(&request)?;
            let rendered = presentation::render(&outcome, format)?;
            let mut sink = sink;
            sink.write_all(rendered.as_bytes())
                .with_context(|| format!("writing report to {}", report_target(config)))?;
            sink.flush().with_context(|| format!("flushing report to {}", report_target(config)))?;
            outcome
        }
    };

    let failures = outcome.failures();
    if failures > 0 {
        info!(failures, "some files were left in the source");
    }
    Ok(outcome)
}

fn report_target(config: &Config) -> String {
    config.output.as_ref().map_or_else(|| "stdout".to_string(), |path| format!("'{}'", path.display()))
}
