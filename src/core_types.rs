//! Defines core data structures used throughout the pipeline.
//!
//! A run moves through three of these: a [`TransformJob`] describing the work,
//! the [`FileRecord`]s it touches, and the [`SummaryReport`] handed to the
//! reporter once the output has been written.

use crate::errors::{io_error_with_path, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Which way the codec is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Raw bytes to Base64 text.
    Encode,
    /// Base64 text back to raw bytes.
    Decode,
}

impl Direction {
    /// Past-tense verb for the success line ("encoded" / "decoded").
    pub fn past_tense(self) -> &'static str {
        match self {
            Direction::Encode => "encoded",
            Direction::Decode => "decoded",
        }
    }

    /// Title of the summary table.
    pub fn summary_title(self) -> &'static str {
        match self {
            Direction::Encode => "File Encoding Summary",
            Direction::Decode => "File Decoding Summary",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

/// A file on disk whose size and SHA-256 digest are read on demand.
///
/// Nothing is cached: each call goes back to the filesystem, so the values
/// describe the file as it is at the time of the call.
///
/// # Examples
///
/// ```
/// use b64file::core_types::FileRecord;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("hello.bin");
/// fs::write(&path, b"hello").unwrap();
///
/// let record = FileRecord::new(&path);
/// assert_eq!(record.size().unwrap(), 5);
/// assert_eq!(
///     record.content_hash().unwrap(),
///     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: PathBuf,
}

impl FileRecord {
    /// Wraps a path. No filesystem access happens here.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The wrapped path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size in bytes, from filesystem metadata.
    pub fn size(&self) -> Result<u64> {
        fs::metadata(&self.path)
            .map(|md| md.len())
            .map_err(|e| io_error_with_path(e, &self.path))
    }

    /// Lowercase hex SHA-256 of the full file content.
    pub fn content_hash(&self) -> Result<String> {
        let content = fs::read(&self.path).map_err(|e| io_error_with_path(e, &self.path))?;
        Ok(hex::encode(Sha256::digest(&content)))
    }
}

/// One unit of work: transform `input` into `output_path` in `direction`.
///
/// Built by [`crate::plan`] after validation and consumed by exactly one call
/// to [`crate::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformJob {
    /// The validated input file.
    pub input: FileRecord,
    /// Where the result is written. Need not exist yet.
    pub output_path: PathBuf,
    /// Encode or decode.
    pub direction: Direction,
}

/// Produced after a successful transform; describes both files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    /// The file that was read.
    pub input: FileRecord,
    /// The file that was written.
    pub output: FileRecord,
    /// Encode or decode.
    pub direction: Direction,
}

impl SummaryReport {
    /// The file holding the raw (non-Base64) bytes.
    pub fn original(&self) -> &FileRecord {
        match self.direction {
            Direction::Encode => &self.input,
            Direction::Decode => &self.output,
        }
    }

    /// The file holding the Base64 text.
    pub fn encoded(&self) -> &FileRecord {
        match self.direction {
            Direction::Encode => &self.output,
            Direction::Decode => &self.input,
        }
    }
}
