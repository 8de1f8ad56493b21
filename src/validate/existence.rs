// src/validate/existence.rs

use crate::errors::{display_path, io_error_with_path, Error, Result};
use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::Path;

/// Returns the metadata of `path` if it is an existing regular file.
///
/// Symlinks are followed, so a link to a regular file passes.
pub fn ensure_regular_file(path: &Path) -> Result<Metadata> {
    let metadata = match fs::metadata(path) {
        Ok(md) => md,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NotFound {
                path: display_path(path),
            })
        }
        Err(e) => return Err(io_error_with_path(e, path)),
    };
    if !metadata.is_file() {
        return Err(Error::NotFound {
            path: display_path(path),
        });
    }
    Ok(metadata)
}

/// Fails with `Error::EmptyFile` when the metadata reports zero bytes.
#[inline]
pub fn ensure_non_empty(path: &Path, metadata: &Metadata) -> Result<()> {
    if metadata.len() == 0 {
        return Err(Error::EmptyFile {
            path: display_path(path),
        });
    }
    Ok(())
}
