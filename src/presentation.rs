// src/presentation.rs
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
    sync::Mutex,
};

use file_mover_domain::{TransferEvent, TransferOutcome};
use file_mover_ports::observer::TransferObserver;
use file_mover_shared_kernel::{PresentationError, Result};

use crate::config::OutputFormat;

/// Where the report goes: stdout, or a file created up front.
///
/// A report file placed directly in `source_dir` is refused, since the batch
/// would move it.
pub fn open_sink(output: Option<&Path>, source_dir: &Path) -> Result<Box<dyn Write + Send>> {
    match output {
        Some(path) => {
            ensure_outside_source(path, source_dir)?;
            let file = File::create(path)
                .map_err(|source| PresentationError::ReportWrite { path: path.to_path_buf(), source })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn ensure_outside_source(path: &Path, source_dir: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // Either side missing means the listing or the create fails on its own.
    let (Ok(parent), Ok(source)) = (parent.canonicalize(), source_dir.canonicalize()) else {
        return Ok(());
    };
    if parent == source {
        return Err(PresentationError::ReportInsideSource {
            path: path.to_path_buf(),
            directory: source_dir.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Writes each status line as soon as the use case records it.
pub struct LineStreamer<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> LineStreamer<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> TransferObserver for LineStreamer<W> {
    fn on_event(&self, event: &TransferEvent) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        writeln!(out, "{event}")?;
        Ok(())
    }

    fn on_complete(&self, _outcome: &TransferOutcome) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        out.flush()?;
        Ok(())
    }
}

/// Renders a finished outcome in one go.
pub fn render(outcome: &TransferOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut text = String::new();
            for line in outcome.log_lines() {
                text.push_str(&line);
                text.push('\n');
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(outcome)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(outcome)?),
    }
}
