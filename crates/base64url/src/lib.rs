//! URL-safe base64 encoding and decoding, RFC 4648 §5.
//!
//! This crate provides base64url encoding/decoding with support for:
//! - Optional `=` padding on output; decoding accepts padded and unpadded text
//! - Allocation-free encoding and decoding into caller buffers of `u8`, `u16`
//!   or `char` code units
//! - Non-raising `try_*` variants
//!
//! # Example
//!
//! ```
//! use rfc4648_base64url::{decode, encode, Padding};
//!
//! let data = b"hello world";
//! let encoded = encode(data, Padding::Omit);
//! let decoded = decode(encoded.as_str()).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod decode;
mod encode;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use decode::{
    decode, decode_append, decoded_len, try_decode, try_decode_into, try_decode_str_into,
};
pub use encode::{encode, encode_append, encoded_len, max_encoded_len, try_encode_into};
pub use rfc4648_core::{CodeUnit, DecodeError, FormatError};

/// Whether encoded output carries trailing `=` padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Padding {
    #[default]
    Omit,
    Include,
}

impl Padding {
    /// Picks [`Padding::Include`] when `padding` is set.
    pub fn from_flag(padding: bool) -> Self {
        if padding {
            Padding::Include
        } else {
            Padding::Omit
        }
    }
}
