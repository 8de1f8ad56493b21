// src/config/validation.rs

use super::Config;
use crate::errors::{Error, Result};

/// Validates field values that clap cannot express (empty strings mostly).
pub(super) fn validate_config(config: &Config) -> Result<()> {
    if config.input_path.as_os_str().is_empty() {
        return Err(Error::Config(
            "File path is required. Please provide a valid file path.".to_string(),
        ));
    }
    if let Some(output) = &config.output_path {
        if output.as_os_str().is_empty() {
            return Err(Error::Config("Output path cannot be empty.".to_string()));
        }
        if output == &config.input_path {
            return Err(Error::Config(format!(
                "Output path '{}' is the same as the input file.",
                output.display()
            )));
        }
    }
    Ok(())
}
