// src/config/path_resolve.rs

use super::Config;
use crate::constants::B64_SUFFIX;
use crate::core_types::Direction;
use crate::errors::{display_path, Error, Result};
use crate::validate::strip_suffix;
use std::path::{Path, PathBuf};

/// Returns the output path for `config`.
///
/// An explicit `output_path` always wins. Otherwise encoding appends `.b64`
/// to the input path and decoding removes it.
///
/// # Errors
/// `Error::InvalidExtension` when decoding without an explicit output and the
/// input name does not end with `.b64`.
pub fn resolve_output_path(config: &Config) -> Result<PathBuf> {
    if let Some(output) = &config.output_path {
        return Ok(output.clone());
    }
    match config.mode {
        Direction::Encode => Ok(append_suffix(&config.input_path, B64_SUFFIX)),
        Direction::Decode => {
            strip_suffix(&config.input_path, B64_SUFFIX).ok_or_else(|| Error::InvalidExtension {
                path: display_path(&config.input_path),
                expected: B64_SUFFIX.to_string(),
            })
        }
    }
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
