//! `b64file` is a library and command-line tool that encodes a file to
//! Base64 text and decodes Base64 files back to their original bytes.
//!
//! Every run is one linear pipeline:
//! 1.  **Plan**: resolve the output path and validate both ends.
//! 2.  **Transform**: read the input, apply the codec, write the output.
//! 3.  **Report**: print a table with the size and SHA-256 of both files.
//!
//! # Example: Library Usage
//!
//! ```
//! use b64file::{execute, ConfigBuilder, Direction};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let input = temp_dir.path().join("hello.bin");
//! fs::write(&input, "hello").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .mode(Direction::Encode)
//!     .input_path(&input)
//!     .build()
//!     .unwrap();
//!
//! let report = execute(&config).unwrap();
//! assert_eq!(report.output.path(), temp_dir.path().join("hello.bin.b64"));
//! assert_eq!(fs::read_to_string(report.output.path()).unwrap(), "aGVsbG8=");
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod prompt;
pub mod validate;

// Re-export key public types for easier use as a library
pub use codec::{Base64Codec, Codec};
pub use config::{Config, ConfigBuilder};
pub use core_types::{Direction, FileRecord, SummaryReport, TransformJob};
pub use errors::{Error, Result};

use crate::constants::B64_SUFFIX;
use std::io::Write;

/// Resolves and validates the work described by `config`.
///
/// The input must be an existing, non-empty regular file. When decoding
/// without an explicit output path it must also end with `.b64`. The output
/// only has to be writable; it is not required to exist.
///
/// # Errors
/// `Error::NotFound`, `Error::EmptyFile`, `Error::InvalidExtension`,
/// `Error::InvalidDestination`, `Error::Config` (input and output are the same
/// file) or `Error::Io`.
pub fn plan(config: &Config) -> Result<TransformJob> {
    let required_suffix = match (config.mode, &config.output_path) {
        (Direction::Decode, None) => Some(B64_SUFFIX),
        _ => None,
    };
    validate::validate_file(&config.input_path, required_suffix)?;

    let output_path = config::resolve_output_path(config)?;
    validate::validate_destination(&output_path)?;
    validate::ensure_distinct(&config.input_path, &output_path)?;

    let job = TransformJob {
        input: FileRecord::new(&config.input_path),
        output_path,
        direction: config.mode,
    };
    log::debug!("Planned job: {:?}", job);
    Ok(job)
}

/// Runs a planned job through `codec`.
///
/// This is the second stage of the pipeline. On a codec failure the output
/// path is left untouched.
pub fn transform(job: &TransformJob, codec: &dyn Codec) -> Result<SummaryReport> {
    processing::run_job(job, codec)
}

/// Plans and transforms with the standard Base64 codec. Nothing is printed.
pub fn execute(config: &Config) -> Result<SummaryReport> {
    let job = plan(config)?;
    transform(&job, &Base64Codec)
}

/// Executes the complete pipeline and writes the summary to `writer`.
///
/// This mirrors the command-line behaviour. A failure while rendering the
/// summary is logged as a warning and does not turn a successful transform
/// into an error.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<SummaryReport> {
    let report = execute(config)?;
    log::info!(
        "{} '{}' -> '{}'",
        report.direction,
        report.input.path().display(),
        report.output.path().display()
    );
    if let Err(e) = output::write_report(writer, &report) {
        log::warn!("Logging Error: failed to render summary: {:#}", e);
    }
    Ok(report)
}
