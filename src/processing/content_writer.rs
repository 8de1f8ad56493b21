// src/processing/content_writer.rs

//! Writes output files through a temporary sibling that is renamed into place.
//!
//! The destination is either left untouched or fully replaced; a failure in
//! the middle of a write never leaves a truncated output behind.

use crate::errors::{io_error_with_path, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the content of `path` with `data`.
///
/// Existing files keep their permissions. New files get `0644` on Unix.
pub(super) fn write_file_replace(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| io_error_with_path(e, parent))?;
    let written = tmp.write_all(data).and_then(|()| tmp.flush());
    written.map_err(|e| io_error_with_path(e, tmp.path()))?;

    match fs::metadata(path) {
        Ok(existing) => fs::set_permissions(tmp.path(), existing.permissions())
            .map_err(|e| io_error_with_path(e, tmp.path()))?,
        Err(_) => set_new_file_permissions(tmp.path())?,
    }

    // On error the temporary file is dropped, which removes it
    tmp.persist(path)
        .map_err(|e| io_error_with_path(e.error, path))?;
    log::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn set_new_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(
        path,
        fs::Permissions::from_mode(crate::constants::NEW_FILE_MODE),
    )
    .map_err(|e| io_error_with_path(e, path))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
