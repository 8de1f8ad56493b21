//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes every failure a
//! single encode or decode run can hit, offering more context than generic
//! I/O or `anyhow` errors. Every variant carries the path it is about.

use crate::codec::CodecError;
use thiserror::Error;

/// Application-specific errors used throughout `b64file`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Validation Errors ---
    /// The path does not resolve to an existing regular file.
    #[error("File '{path}' does not exist or is not a regular file.")]
    NotFound {
        /// The path that was checked.
        path: String,
    },

    /// The path exists but the file has zero bytes.
    #[error("File '{path}' is empty.")]
    EmptyFile {
        /// The path that was checked.
        path: String,
    },

    /// The path lacks a required suffix, so no output path can be derived from it.
    #[error("File '{path}' does not have a valid '{expected}' extension.")]
    InvalidExtension {
        /// The offending path.
        path: String,
        /// The suffix that was required (e.g. `.b64`).
        expected: String,
    },

    /// The output location cannot receive a file (missing parent, read-only, a directory...).
    #[error("Cannot write to '{path}': {reason}")]
    InvalidDestination {
        /// The output path.
        path: String,
        /// Human-readable reason.
        reason: String,
    },

    // --- Codec Errors ---
    /// Base64 encoding of the input failed.
    #[error("Failed to encode '{path}' to Base64: {source}")]
    Encode {
        /// The input path.
        path: String,
        /// The underlying codec failure.
        #[source]
        source: CodecError,
    },

    /// The input is not valid Base64.
    #[error("Failed to decode Base64 data from '{path}': {source}")]
    Decode {
        /// The input path.
        path: String,
        /// The underlying codec failure.
        #[source]
        source: CodecError,
    },

    // --- I/O Errors ---
    /// Error occurring during file access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// Invalid or incomplete configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: display_path(path),
        source,
    }
}

/// Renders a path the way error messages and the summary show it.
pub(crate) fn display_path<P: AsRef<std::path::Path>>(path: P) -> String {
    path.as_ref().display().to_string()
}
