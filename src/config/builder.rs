// src/config/builder.rs

use super::{validation::validate_config, Config};
use crate::cli::Cli;
use crate::core_types::Direction;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically.
///
/// # Examples
///
/// ```
/// use b64file::config::ConfigBuilder;
/// use b64file::core_types::Direction;
///
/// let config = ConfigBuilder::new()
///     .mode(Direction::Encode)
///     .input_path("hello.bin")
///     .output_path("hello.txt")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mode, Direction::Encode);
/// assert_eq!(config.output_path.unwrap().to_str(), Some("hello.txt"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    mode: Option<Direction>,
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates an empty builder. `mode` and `input_path` must be set before `build`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let mode = if cli.decode {
            Direction::Decode
        } else {
            Direction::Encode
        };
        Self {
            mode: Some(mode),
            input_path: cli.file.map(PathBuf::from),
            output_path: cli.output.map(PathBuf::from),
        }
    }

    /// Sets the direction.
    pub fn mode(mut self, mode: Direction) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the file to read.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Sets the file to write. Leave unset to derive it from the input path.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Validates the collected options and produces a `Config`.
    ///
    /// # Errors
    /// `Error::Config` if the mode or input path is missing or a path is empty.
    pub fn build(self) -> Result<Config> {
        let mode = self
            .mode
            .ok_or_else(|| Error::Config("Either encode or decode mode must be chosen.".into()))?;
        let input_path = self.input_path.ok_or_else(|| {
            Error::Config("File path is required. Please provide a valid file path.".into())
        })?;
        let config = Config {
            mode,
            input_path,
            output_path: self.output_path,
        };
        validate_config(&config)?;
        Ok(config)
    }
}
