//! Filesystem utilities.
//!
//! Helper functions for file operations.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Recursively remove a directory if it exists. Missing is not an error.
pub fn remove_dir_if_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        std::fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Recursively copy `src` to `dst`, preserving the relative tree.
///
/// `dst` must not exist yet; parents are created as needed. Symlinks are
/// followed, matching `std::fs::copy` semantics for the spanned files.
pub fn copy_tree(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|err| {
            err.into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk failed"))
        })?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| std::io::Error::other("walked path escaped copy root"))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Final path component as a `&str`, or the whole input if it has none.
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
