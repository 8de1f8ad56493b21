//! The `b64file` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use b64file::prelude::*;
//!
//! let config = ConfigBuilder::new()
//!     .mode(Direction::Decode)
//!     .input_path("hello.bin.b64")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.mode, Direction::Decode);
//! ```

pub use crate::codec::{Base64Codec, Codec, CodecError};
pub use crate::config::{resolve_output_path, Config, ConfigBuilder};
pub use crate::core_types::{Direction, FileRecord, SummaryReport, TransformJob};
pub use crate::errors::{Error, Result};
pub use crate::output::write_report;
pub use crate::validate::{validate_destination, validate_file};
pub use crate::{execute, plan, run, transform};
