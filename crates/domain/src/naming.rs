//! Destination names are rebuilt from the source's base name and extension
//! rather than copied verbatim. The two only differ for names ending in a
//! dot, where the empty extension is dropped (`notes.` becomes `notes`).

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// The file name without its final extension.
pub fn base_name(path: &Path) -> Option<&OsStr> {
    path.file_stem()
}

/// The final extension, ignoring an empty one after a trailing dot.
pub fn extension(path: &Path) -> Option<&OsStr> {
    path.extension().filter(|ext| !ext.is_empty())
}

/// `base_name` + `.` + `extension`, or just the base name when there is no extension.
pub fn reconstructed_file_name(path: &Path) -> Option<OsString> {
    let stem = base_name(path)?;
    let mut name = stem.to_os_string();
    if let Some(ext) = extension(path) {
        name.push(".");
        name.push(ext);
    }
    Some(name)
}

/// Where `source_file` lands inside `destination_dir`.
pub fn destination_path(source_file: &Path, destination_dir: &Path) -> Option<PathBuf> {
    reconstructed_file_name(source_file).map(|name| destination_dir.join(name))
}
