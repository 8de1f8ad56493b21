// src/codec.rs

//! The byte-level transform applied by the pipeline.
//!
//! `Codec` is the seam between orchestration and the actual algorithm. The
//! crate ships one implementation, [`Base64Codec`], which uses the standard
//! RFC 4648 alphabet with `=` padding and no line wrapping.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Failures raised by a [`Codec`], independent of any file path.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The encoded form of the input would not fit in memory.
    #[error("encoded length of {0} input bytes overflows usize")]
    LengthOverflow(usize),

    /// The input is not valid Base64 (bad symbol, padding or length).
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    /// The input contained nothing but whitespace.
    #[error("input contains no Base64 data")]
    NoData,
}

/// A reversible byte transform.
pub trait Codec {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Transforms raw bytes into their encoded form.
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Reverses [`Codec::encode`].
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Standard, padded Base64.
///
/// Decoding ignores spaces, tabs, CR and LF anywhere in the input (so wrapped or
/// newline-terminated files are accepted) but is otherwise strict.
///
/// ```
/// use b64file::codec::{Base64Codec, Codec};
///
/// let encoded = Base64Codec.encode(b"hello").unwrap();
/// assert_eq!(encoded, b"aGVsbG8=");
/// assert_eq!(Base64Codec.decode(b"aGVs\nbG8=\n").unwrap(), b"hello");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl Codec for Base64Codec {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        // The engine panics on overflow, so check the length up front.
        base64::encoded_len(data.len(), true).ok_or(CodecError::LengthOverflow(data.len()))?;
        Ok(STANDARD.encode(data).into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let compact: Vec<u8> = data
            .iter()
            .copied()
            .filter(|b| !matches!(*b, b' ' | b'\t' | b'\r' | b'\n'))
            .collect();
        if compact.is_empty() {
            return Err(CodecError::NoData);
        }
        Ok(STANDARD.decode(&compact)?)
    }
}
