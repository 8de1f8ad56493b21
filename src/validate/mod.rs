// src/validate/mod.rs

//! Pre-flight checks run before any file is read or written.
//!
//! Input files must exist, be regular, be non-empty and optionally carry a
//! suffix. The output location only has to be able to receive a file; it does
//! not need to exist yet.

mod destination;
mod existence;
mod extension;

pub use destination::{ensure_distinct, validate_destination};
pub use existence::{ensure_non_empty, ensure_regular_file};
pub use extension::{has_suffix, strip_suffix};

use crate::errors::Result;
use std::path::Path;

/// Validates an input file.
///
/// Checks, in order: the path is an existing regular file, it ends with
/// `required_suffix` (when given), and it is not empty. Only metadata is read.
///
/// # Errors
/// `Error::NotFound`, `Error::InvalidExtension`, `Error::EmptyFile`, or
/// `Error::Io` if the metadata lookup fails for another reason.
pub fn validate_file(path: &Path, required_suffix: Option<&str>) -> Result<()> {
    let metadata = ensure_regular_file(path)?;
    if let Some(suffix) = required_suffix {
        extension::ensure_suffix(path, suffix)?;
    }
    ensure_non_empty(path, &metadata)?;
    log::debug!("Validated input file: {}", path.display());
    Ok(())
}
