// src/validate/extension.rs

use crate::errors::{display_path, Error, Result};
use std::path::{Path, PathBuf};

/// Checks whether the file name of `path` ends with `suffix` (case-sensitive).
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}

/// Removes `suffix` from the file name of `path`.
///
/// Returns `None` if the name does not end with the suffix, is not valid
/// UTF-8, or would be empty after stripping (e.g. a file named just `.b64`).
pub fn strip_suffix(path: &Path, suffix: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(suffix)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(stem))
}

pub(super) fn ensure_suffix(path: &Path, suffix: &str) -> Result<()> {
    if has_suffix(path, suffix) {
        Ok(())
    } else {
        Err(Error::InvalidExtension {
            path: display_path(path),
            expected: suffix.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix(Path::new("dir/hello.bin.b64"), ".b64"));
        assert!(!has_suffix(Path::new("dir/hello.bin"), ".b64"));
        // Case-sensitive like the rest of the tool
        assert!(!has_suffix(Path::new("HELLO.B64"), ".b64"));
        // Directory components do not count
        assert!(!has_suffix(Path::new("x.b64/"), ".txt"));
    }

    #[test]
    fn test_strip_suffix() {
        assert_eq!(
            strip_suffix(Path::new("dir/hello.bin.b64"), ".b64"),
            Some(PathBuf::from("dir/hello.bin"))
        );
        assert_eq!(
            strip_suffix(Path::new("archive.b64"), ".b64"),
            Some(PathBuf::from("archive"))
        );
        assert_eq!(strip_suffix(Path::new("data.txt"), ".b64"), None);
        assert_eq!(strip_suffix(Path::new("dir/.b64"), ".b64"), None);
    }

    #[test]
    fn test_ensure_suffix_error_names_expected() {
        let err = ensure_suffix(Path::new("data.txt"), ".b64").unwrap_err();
        match err {
            Error::InvalidExtension { path, expected } => {
                assert_eq!(path, "data.txt");
                assert_eq!(expected, ".b64");
            }
            other => panic!("Expected InvalidExtension, got {other:?}"),
        }
    }
}
