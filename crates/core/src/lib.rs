//! Shared building blocks for the RFC 4648 codecs.
//!
//! Both `rfc4648-base16` and `rfc4648-base64url` write into caller buffers,
//! report how much was written, and describe failures with the error types
//! defined here. They never depend on each other.

mod error;
mod unit;

pub use error::{DecodeError, FormatError};
pub use unit::CodeUnit;
