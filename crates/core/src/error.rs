//! Error types shared by the codecs.

use thiserror::Error;

/// Reason an encoded input (or the buffer it decodes into) was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Base16 input must hold an even number of characters.
    #[error("input length {len} is odd")]
    OddLength { len: usize },
    /// Base64 input ends with a single character, which carries less than a byte.
    #[error("input length {len} leaves a truncated final group")]
    TruncatedGroup { len: usize },
    /// The character at `position` is not part of the alphabet.
    #[error("invalid symbol at position {position}")]
    InvalidSymbol { position: usize },
    /// The code unit at `position` does not fit in a single byte.
    #[error("code unit at position {position} is outside 0x00..=0xFF")]
    NonByteUnit { position: usize },
    /// The destination cannot hold the decoded output.
    #[error("destination holds {available} bytes, {required} required")]
    BufferTooSmall { required: usize, available: usize },
}

/// Error returned by the allocating `decode` entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input is absent")]
    NullInput,
    #[error("invalid encoding: {0}")]
    Format(#[from] FormatError),
}
