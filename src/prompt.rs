// src/prompt.rs

//! Fallback for a missing `--file` argument.
//!
//! When stdin is a terminal the user is asked for the path; otherwise one
//! line is read from stdin without a prompt, so `echo path | b64file -e`
//! works too.

use crate::errors::{Error, Result};
use std::io::{self, BufRead, Write};

/// Asks for the input path on the terminal (or reads it from piped stdin).
///
/// # Errors
/// `Error::Config` if no non-empty line could be read.
pub fn ask_for_input_path() -> Result<String> {
    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        let mut stderr = io::stderr().lock();
        // Prompt failures only lose the prompt text, not the answer
        let _ = write!(
            stderr,
            "File path is required. Please provide a valid file path.\nPlease enter the file path: "
        );
        let _ = stderr.flush();
    }
    read_path_line(&mut io::stdin().lock())
}

/// Reads one line from `reader` and returns it trimmed.
pub fn read_path_line(reader: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| Error::Config(format!("Failed to read file path from stdin: {}", e)))?;
    let path = line.trim();
    if path.is_empty() {
        return Err(Error::Config(
            "File path is required. Please provide a valid file path.".to_string(),
        ));
    }
    log::debug!("Input path read from stdin: {}", path);
    Ok(path.to_string())
}
