/// Recursive input enumeration
///
/// Every regular file under the root is a conversion candidate, at any
/// depth. There is no extension filtering here: files that turn out not to
/// be images fail at decode time and are reported as per-file failures.
use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerate all regular files under `root`, descending into subdirectories.
///
/// An inaccessible root (missing, not a directory, or unreadable during the
/// walk) is a run-level error; no partial listing is returned.
pub fn scan_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(ConvertError::InputDirNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ConvertError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
