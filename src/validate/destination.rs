// src/validate/destination.rs

use crate::errors::{display_path, io_error_with_path, Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Checks that a file can be written at `path`.
///
/// The file itself may or may not exist. Its parent directory must exist and
/// accept new files from the current user, and `path` must not name a
/// directory. Writability is checked by creating (and dropping) an anonymous
/// temporary file in the parent.
pub fn validate_destination(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(invalid(path, "path is a directory"));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let parent_md = match fs::metadata(parent) {
        Ok(md) => md,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(invalid(
                path,
                &format!("parent directory '{}' does not exist", parent.display()),
            ))
        }
        Err(e) => return Err(io_error_with_path(e, parent)),
    };
    if !parent_md.is_dir() {
        return Err(invalid(
            path,
            &format!("'{}' is not a directory", parent.display()),
        ));
    }
    // Mode bits do not reflect the caller's actual access
    match tempfile::tempfile_in(parent) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(invalid(
                path,
                &format!("parent directory '{}' is not writable", parent.display()),
            ))
        }
        Err(e) => return Err(io_error_with_path(e, parent)),
    }

    log::debug!("Validated output destination: {}", path.display());
    Ok(())
}

/// Fails if `input` and `output` refer to the same file.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        // Output does not exist yet, so it cannot alias an existing input
        _ => input == output,
    };
    if same {
        return Err(Error::Config(format!(
            "Output path '{}' is the same as the input file.",
            output.display()
        )));
    }
    Ok(())
}

fn invalid(path: &Path, reason: &str) -> Error {
    Error::InvalidDestination {
        path: display_path(path),
        reason: reason.to_string(),
    }
}
