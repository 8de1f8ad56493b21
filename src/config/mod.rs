//! Defines the `Config` struct for a single run.
//!
//! The configuration is deliberately small: which way to transform, which
//! file to read, and optionally where to write. Everything else is derived.

use crate::core_types::Direction;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use path_resolve::resolve_output_path;
mod builder;
pub mod path_resolve;
mod validation;

/// Settings for one encode or decode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Encode or decode.
    pub mode: Direction,
    /// The file to read.
    pub input_path: PathBuf,
    /// Where to write. `None` means derive it from `input_path`.
    pub output_path: Option<PathBuf>,
}
