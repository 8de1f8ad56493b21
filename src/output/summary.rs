// src/output/summary.rs

use crate::constants::{COLUMN_SEPARATOR, SUMMARY_COLUMNS};
use crate::core_types::{FileRecord, SummaryReport};
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

/// One line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// The path as shown in the table.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Lowercase hex SHA-256.
    pub hash: String,
}

impl SummaryRow {
    /// Reads size and hash of `record` from disk.
    pub fn from_record(record: &FileRecord) -> Result<Self> {
        let path = record.path().display().to_string();
        let size = record
            .size()
            .with_context(|| format!("Unable to determine size of file '{}'", path))?;
        let hash = record
            .content_hash()
            .with_context(|| format!("Unable to calculate SHA256 hash for file '{}'", path))?;
        Ok(Self { path, size, hash })
    }

    fn cells(&self) -> [String; 3] {
        [self.path.clone(), self.size.to_string(), self.hash.clone()]
    }
}

/// Collects the rows for `report`: the raw file first, then the Base64 file.
pub fn summary_rows(report: &SummaryReport) -> Result<Vec<SummaryRow>> {
    Ok(vec![
        SummaryRow::from_record(report.original())?,
        SummaryRow::from_record(report.encoded())?,
    ])
}

/// Writes the titled summary table for `rows`.
///
/// Columns are padded to their widest cell; the size column is right-aligned
/// and the last column carries no trailing padding.
pub fn write_summary(writer: &mut dyn Write, title: &str, rows: &[SummaryRow]) -> Result<()> {
    debug!("Writing summary for {} files...", rows.len());
    let cells: Vec<[String; 3]> = rows.iter().map(SummaryRow::cells).collect();

    let mut widths = SUMMARY_COLUMNS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(writer, "{}", title)?;
    write_line(
        writer,
        &SUMMARY_COLUMNS.map(str::to_string),
        &widths,
    )?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(writer, "{}", rule.join("-+-"))?;
    for row in &cells {
        write_line(writer, row, &widths)?;
    }
    Ok(())
}

fn write_line(writer: &mut dyn Write, cells: &[String; 3], widths: &[usize; 3]) -> Result<()> {
    writeln!(
        writer,
        "{:<w0$}{sep}{:>w1$}{sep}{}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        sep = COLUMN_SEPARATOR
    )?;
    Ok(())
}
