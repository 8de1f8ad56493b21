// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::{fs, path::Path};

/// Reads the entire content of a file into memory.
/// The handle is closed before this returns, on success or failure.
pub(super) fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
