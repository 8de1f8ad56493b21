// src/cli.rs

use clap::{ArgGroup, Parser};

/// Encode a file to Base64 text, or decode a Base64 file back to its original bytes.
///
/// After each run a summary table lists both files with their sizes and
/// SHA-256 hashes. When encoding, the output defaults to `<FILE>.b64`; when
/// decoding, it defaults to `<FILE>` with its `.b64` suffix removed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["encode", "decode"]),
))]
pub struct Cli {
    // --- Mode ---
    /// Encode a file to Base64.
    #[arg(short = 'e', long, action = clap::ArgAction::SetTrue)]
    pub encode: bool,

    /// Decode a Base64 file.
    #[arg(short = 'd', long, action = clap::ArgAction::SetTrue)]
    pub decode: bool,

    // --- Paths ---
    /// Path to the file to be encoded or decoded. Asked for on stdin when omitted.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<String>,

    /// Path to save the output file (optional).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,
}
