use std::{io, path::Path};

use file_mover_domain::{OutcomeRecorder, TransferEvent, TransferOutcome, TransferRequest, naming};
use file_mover_ports::{filesystem::TransferFileSystem, observer::TransferObserver};
use file_mover_shared_kernel::{FileSize, InfrastructureError, TransferError, TransferResult};
use tracing::{debug, error, info, warn};

/// What happened to a single source file.
#[derive(Debug)]
enum FileStep {
    Transferred(FileSize),
    Duplicate(String),
}

/// Moves every regular file directly inside the source into the destination.
pub struct TransferDirectory<'a> {
    fs: &'a dyn TransferFileSystem,
    observer: &'a dyn TransferObserver,
}

impl<'a> TransferDirectory<'a> {
    pub fn new(fs: &'a dyn TransferFileSystem, observer: &'a dyn TransferObserver) -> Self {
        Self { fs, observer }
    }

    /// Runs one batch.
    ///
    /// # Errors
    ///
    /// Only `DestinationUnavailable` is returned. Per-file failures and a
    /// source that cannot be listed end up in the outcome's log.
    pub fn run(&self, request: &TransferRequest) -> TransferResult<TransferOutcome> {
        let destination = request.destination();
        info!(source = %request.source().display(), destination = %destination.display(), "starting transfer");

        self.fs.create_dir_all(destination).map_err(|err| {
            error!(destination = %destination.display(), error = %err, "cannot create destination");
            TransferError::DestinationUnavailable { path: destination.to_path_buf(), source: err.into_io() }
        })?;

        let mut recorder = OutcomeRecorder::start(request);
        self.emit(&mut recorder, TransferEvent::Started);

        let files = match self.fs.list_files(request.source()) {
            Ok(files) => files,
            Err(err) => {
                error!(source = %request.source().display(), error = %err, "cannot list source");
                let unexpected = TransferError::Unexpected { message: err.to_string() };
                self.emit(&mut recorder, unexpected.into());
                return Ok(self.complete(recorder));
            }
        };
        debug!(count = files.len(), "listed source files");

        for file in &files {
            match self.transfer_file(file, destination) {
                Ok(FileStep::Transferred(size)) => {
                    debug!(file = %file.display(), bytes = size.bytes(), "transferred");
                    recorder.add_transferred(size);
                }
                Ok(FileStep::Duplicate(base_name)) => {
                    debug!(file = %file.display(), "destination exists, skipping");
                    self.emit(&mut recorder, TransferEvent::DuplicateSkipped { base_name });
                }
                Err(err) => {
                    warn!(file = %file.display(), error = %err, "file transfer failed");
                    self.emit(&mut recorder, err.into());
                }
            }
        }

        let count = recorder.files_transferred();
        let size = recorder.total_bytes();
        self.emit(&mut recorder, TransferEvent::FilesTransferred { count });
        self.emit(&mut recorder, TransferEvent::TotalSize { size });
        info!(files = count, bytes = size.bytes(), "transfer finished");

        Ok(self.complete(recorder))
    }

    fn transfer_file(&self, file: &Path, destination_dir: &Path) -> TransferResult<FileStep> {
        let Some(target) = naming::destination_path(file, destination_dir) else {
            return Err(TransferError::FileIo {
                path: file.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            });
        };

        if self.fs.exists(&target) {
            let base_name = naming::base_name(file).map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
            return Ok(FileStep::Duplicate(base_name));
        }

        let len = self.fs.file_len(file).map_err(|err| self.classify(file, err))?;
        self.fs.copy_file(file, &target).map_err(|err| self.classify(file, err))?;
        match self.fs.remove_file(file) {
            Ok(()) => {}
            // Already gone: the source no longer holds it, which is all the delete is for.
            Err(err) if err.io_kind() == Some(io::ErrorKind::NotFound) => {
                debug!(file = %file.display(), "source vanished before delete");
            }
            Err(err) => return Err(self.classify(file, err)),
        }

        Ok(FileStep::Transferred(FileSize::from(len)))
    }

    /// `NotFound` only means the file vanished when the source is really gone;
    /// otherwise it came from the destination side.
    fn classify(&self, path: &Path, err: InfrastructureError) -> TransferError {
        if err.io_kind() == Some(io::ErrorKind::NotFound) && !self.fs.exists(path) {
            TransferError::FileMissing { path: path.to_path_buf() }
        } else {
            TransferError::FileIo { path: path.to_path_buf(), source: err.into_io() }
        }
    }

    fn emit(&self, recorder: &mut OutcomeRecorder, event: TransferEvent) {
        let event = recorder.record(event);
        if let Err(err) = self.observer.on_event(event) {
            warn!(error = %err, "observer rejected transfer event");
        }
    }

    fn complete(&self, recorder: OutcomeRecorder) -> TransferOutcome {
        let outcome = recorder.finish();
        if let Err(err) = self.observer.on_complete(&outcome) {
            warn!(error = %err, "observer rejected transfer outcome");
        }
        outcome
    }
}
