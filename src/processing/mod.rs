//! Handles the transform stage of the `b64file` pipeline.
//!
//! Given a validated [`TransformJob`], this module reads the input, runs it
//! through a [`Codec`], writes the result and returns the [`SummaryReport`].
//! Steps run strictly in order and the first failure ends the run; nothing is
//! retried.

use crate::codec::Codec;
use crate::core_types::{Direction, FileRecord, SummaryReport, TransformJob};
use crate::errors::{display_path, Error, Result};
use log::debug;

mod content_reader;
mod content_writer;

use content_reader::read_file_bytes;
use content_writer::write_file_replace;

/// Runs one job to completion.
///
/// # Errors
/// `Error::Io` if reading or writing fails, `Error::Encode`/`Error::Decode`
/// if the codec rejects the data. When the codec fails, the output path is
/// not touched.
pub fn run_job(job: &TransformJob, codec: &dyn Codec) -> Result<SummaryReport> {
    let input_path = job.input.path();
    debug!(
        "Running {} job: {} -> {} ({})",
        job.direction,
        input_path.display(),
        job.output_path.display(),
        codec.name()
    );

    // --- 1. Read ---
    let data = read_file_bytes(input_path)?;

    // --- 2. Transform ---
    let transformed = match job.direction {
        Direction::Encode => codec.encode(&data).map_err(|source| Error::Encode {
            path: display_path(input_path),
            source,
        })?,
        Direction::Decode => codec.decode(&data).map_err(|source| Error::Decode {
            path: display_path(input_path),
            source,
        })?,
    };
    debug!(
        "Transformed {} bytes into {} bytes",
        data.len(),
        transformed.len()
    );

    // --- 3. Write ---
    write_file_replace(&job.output_path, &transformed)?;

    Ok(SummaryReport {
        input: job.input.clone(),
        output: FileRecord::new(&job.output_path),
        direction: job.direction,
    })
}
