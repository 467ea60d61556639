// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use file_mover_ports::filesystem::TransferFileSystem;
use file_mover_shared_kernel::{InfraResult, InfrastructureError};
use ignore::{DirEntry, WalkBuilder};
use tracing::trace;

/// Filesystem adapter backed by `std::fs`, with `ignore` for listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl TransferFileSystem for LocalFileSystem {
    fn list_files(&self, dir: &Path) -> InfraResult<Vec<PathBuf>> {
        let metadata = fs::metadata(dir).map_err(|e| InfrastructureError::fs("list", dir, e))?;
        // The walker would yield a plain file as its own root entry.
        if !metadata.is_dir() {
            return Err(InfrastructureError::DirectoryListing {
                path: dir.to_path_buf(),
                details: "not a directory".to_string(),
            });
        }

        let mut builder = WalkBuilder::new(dir);
        // Every entry counts: no hidden-file or ignore-file filtering.
        builder.standard_filters(false);
        builder.max_depth(Some(1));
        builder.follow_links(false);
        builder.sort_by_file_name(|a, b| a.cmp(b));

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|err| walk_error(dir, err))?;
            if entry.depth() == 1 && is_regular_file(&entry) {
                files.push(entry.into_path());
            }
        }
        trace!(dir = %dir.display(), count = files.len(), "listed files");
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count: copying onto one would write through it.
        fs::symlink_metadata(path).is_ok()
    }

    fn file_len(&self, path: &Path) -> InfraResult<u64> {
        fs::metadata(path).map(|m| m.len()).map_err(|e| InfrastructureError::fs("stat", path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> InfraResult<()> {
        fs::copy(from, to).map(|_| ()).map_err(|e| InfrastructureError::fs("copy", from, e))
    }

    fn remove_file(&self, path: &Path) -> InfraResult<()> {
        fs::remove_file(path).map_err(|e| InfrastructureError::fs("remove", path, e))
    }

    fn create_dir_all(&self, dir: &Path) -> InfraResult<()> {
        fs::create_dir_all(dir).map_err(|e| InfrastructureError::fs("create_dir_all", dir, e))
    }
}

/// Regular files, plus symlinks that resolve to one.
fn is_regular_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
        _ => false,
    }
}

fn walk_error(dir: &Path, err: ignore::Error) -> InfrastructureError {
    let details = err.to_string();
    match err.into_io_error() {
        Some(source) => InfrastructureError::fs("list", dir, source),
        None => InfrastructureError::DirectoryListing { path: dir.to_path_buf(), details },
    }
}
