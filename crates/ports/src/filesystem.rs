// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use file_mover_shared_kernel::InfraResult;

/// Port for the filesystem operations a directory transfer performs.
pub trait TransferFileSystem: Send + Sync {
    /// Regular files directly inside `dir`, ordered by file name.
    fn list_files(&self, dir: &Path) -> InfraResult<Vec<PathBuf>>;

    fn exists(&self, path: &Path) -> bool;

    fn file_len(&self, path: &Path) -> InfraResult<u64>;

    /// Copies `from` to `to`, replacing `to` if it exists.
    fn copy_file(&self, from: &Path, to: &Path) -> InfraResult<()>;

    fn remove_file(&self, path: &Path) -> InfraResult<()>;

    /// Creates `dir` and any missing parents.
    fn create_dir_all(&self, dir: &Path) -> InfraResult<()>;
}
