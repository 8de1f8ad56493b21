// src/output/mod.rs

//! Renders the human-readable result of a run.
//!
//! Rendering only reads the two files again for their sizes and hashes; it
//! never changes them. Callers treat a rendering failure as a separate
//! problem from the transform itself.

use crate::core_types::SummaryReport;
use anyhow::Result;
use log::debug;
use std::io::Write;

pub mod summary;

pub use summary::{summary_rows, write_summary, SummaryRow};

/// Writes the summary table followed by the success line.
///
/// All sizes and hashes are collected before anything is written, so a file
/// that vanished in the meantime produces an error and no partial table.
pub fn write_report(writer: &mut dyn Write, report: &SummaryReport) -> Result<()> {
    debug!("Starting report generation...");
    let rows = summary_rows(report)?;
    write_summary(writer, report.direction.summary_title(), &rows)?;
    write_success_line(writer, report)?;
    writer.flush()?;
    Ok(())
}

/// One-line confirmation naming source and destination.
pub fn write_success_line(writer: &mut dyn Write, report: &SummaryReport) -> Result<()> {
    writeln!(
        writer,
        "File '{}' has been successfully {} to '{}'.",
        report.input.path().display(),
        report.direction.past_tense(),
        report.output.path().display()
    )?;
    Ok(())
}
