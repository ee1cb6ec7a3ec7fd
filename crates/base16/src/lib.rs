//! Base16 (hex) encoding and decoding, RFC 4648 §8.
//!
//! Output case is configurable and input is accepted in either case. Every
//! operation comes in three shapes:
//! - allocating: [`encode`], [`decode`]
//! - non-raising: [`try_decode`]
//! - buffer-reuse, writing into caller memory: [`try_encode_into`],
//!   [`try_decode_into`], [`encode_append`], [`decode_append`]
//!
//! # Example
//!
//! ```
//! use rfc4648_base16::{decode, encode, Case};
//!
//! let encoded = encode(b"\x0f\xf0", Case::Lower);
//! assert_eq!(encoded, "0ff0");
//! assert_eq!(decode(encoded.as_str()).unwrap(), b"\x0f\xf0");
//! ```

mod constants;
mod decode;
mod encode;

pub use constants::{ALPHABET_LOWER, ALPHABET_UPPER};
pub use decode::{
    decode, decode_append, decoded_len, try_decode, try_decode_into, try_decode_str_into,
};
pub use encode::{encode, encode_append, encoded_len, try_encode_into};
pub use rfc4648_core::{CodeUnit, DecodeError, FormatError};

/// Letter case of encoded output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Case {
    #[default]
    Lower,
    Upper,
}

impl Case {
    /// Picks [`Case::Upper`] when `to_upper` is set.
    pub fn from_upper(to_upper: bool) -> Self {
        if to_upper {
            Case::Upper
        } else {
            Case::Lower
        }
    }

    pub(crate) fn alphabet(self) -> &'static [u8; 16] {
        match self {
            Case::Lower => ALPHABET_LOWER,
            Case::Upper => ALPHABET_UPPER,
        }
    }
}
