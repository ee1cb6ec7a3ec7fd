//! Base16 decoding.

use rfc4648_core::{CodeUnit, DecodeError, FormatError};
use tracing::trace;

use crate::constants::DECODE_MAP;

/// Number of bytes `len` characters decode to, or `None` if `len` is odd.
pub fn decoded_len(len: usize) -> Option<usize> {
    (len % 2 == 0).then_some(len / 2)
}

#[inline]
fn nibble<U: CodeUnit>(unit: U, position: usize) -> Result<u8, FormatError> {
    let byte = unit.to_byte().ok_or(FormatError::NonByteUnit { position })?;
    let value = DECODE_MAP[byte as usize];
    if value < 0 {
        return Err(FormatError::InvalidSymbol { position });
    }
    Ok(value as u8)
}

/// Decodes base16 `input` into `dest` without allocating.
///
/// Digits are case-insensitive. Returns the number of bytes written. Fails
/// when the input length is odd, when `dest` is shorter than half the input,
/// or when a unit is not a hex digit. Empty input decodes to zero bytes.
///
/// # Example
///
/// ```
/// use rfc4648_base16::try_decode_into;
///
/// let mut dest = [0u8; 2];
/// assert_eq!(try_decode_into(b"0fF0", &mut dest), Ok(2));
/// assert_eq!(dest, [0x0f, 0xf0]);
/// ```
pub fn try_decode_into<U: CodeUnit>(input: &[U], dest: &mut [u8]) -> Result<usize, FormatError> {
    let len = input.len();
    let required = decoded_len(len).ok_or(FormatError::OddLength { len })?;
    if dest.len() < required {
        return Err(FormatError::BufferTooSmall {
            required,
            available: dest.len(),
        });
    }

    let mut i = 0;
    while i < len {
        let hi = nibble(input[i], i)?;
        let lo = nibble(input[i + 1], i + 1)?;
        dest[i / 2] = (hi << 4) | lo;
        i += 2;
    }

    Ok(required)
}

/// Decodes a base16 string into `dest`. See [`try_decode_into`].
pub fn try_decode_str_into(input: &str, dest: &mut [u8]) -> Result<usize, FormatError> {
    try_decode_into(input.as_bytes(), dest)
}

/// Appends the bytes decoded from `input` to `out`.
///
/// On failure `out` keeps its original contents.
pub fn decode_append(input: &str, out: &mut Vec<u8>) -> Result<usize, FormatError> {
    let len = input.len();
    let required = decoded_len(len).ok_or(FormatError::OddLength { len })?;
    let start = out.len();
    out.resize(start + required, 0);
    try_decode_str_into(input, &mut out[start..]).inspect_err(|_| out.truncate(start))
}

/// Decodes a base16 string.
///
/// # Errors
///
/// [`DecodeError::NullInput`] when `input` is `None`, and
/// [`DecodeError::Format`] when it is not valid base16.
///
/// # Example
///
/// ```
/// use rfc4648_base16::decode;
///
/// let bytes = decode("0123456789abcDEF").unwrap();
/// assert_eq!(bytes, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
/// ```
pub fn decode<'a>(input: impl Into<Option<&'a str>>) -> Result<Vec<u8>, DecodeError> {
    let Some(input) = input.into() else {
        trace!("base16 decode called without input");
        return Err(DecodeError::NullInput);
    };
    let mut out = Vec::new();
    decode_append(input, &mut out).map_err(|err| {
        trace!(%err, len = input.len(), "rejected base16 input");
        err
    })?;
    Ok(out)
}

/// Decodes a base16 string, returning `None` for absent or malformed input.
pub fn try_decode<'a>(input: impl Into<Option<&'a str>>) -> Option<Vec<u8>> {
    decode(input).ok()
}
