// src/constants.rs

/// Suffix appended on encode and stripped on decode.
pub const B64_SUFFIX: &str = ".b64";

/// Column headers of the summary table.
pub const SUMMARY_COLUMNS: [&str; 3] = ["File", "Size (bytes)", "SHA256 Hash"];

/// Separator between columns of the summary table.
pub const COLUMN_SEPARATOR: &str = " | ";

/// Permissions given to newly created output files on Unix.
#[cfg(unix)]
pub const NEW_FILE_MODE: u32 = 0o644;
