//! URL-safe base64 decoding.

use rfc4648_core::{CodeUnit, DecodeError, FormatError};
use tracing::trace;

use crate::constants::{DECODE_MAP, PAD};

/// Number of bytes `len` unpadded characters decode to: `len * 3 / 4`.
pub fn decoded_len(len: usize) -> usize {
    len / 4 * 3 + len % 4 * 3 / 4
}

#[inline]
fn sextet<U: CodeUnit>(input: &[U], position: usize) -> Result<u8, FormatError> {
    let byte = input[position]
        .to_byte()
        .ok_or(FormatError::NonByteUnit { position })?;
    let value = DECODE_MAP[byte as usize];
    if value < 0 {
        return Err(FormatError::InvalidSymbol { position });
    }
    Ok(value as u8)
}

/// Decodes unpadded base64url `input` into `dest` without allocating.
///
/// Padding is not stripped here; a `=` is an invalid symbol. Use
/// [`try_decode_str_into`] for text that may carry padding. `dest` must hold
/// at least [`decoded_len`] bytes. A final group of a single character is
/// rejected. Returns the number of bytes written.
///
/// # Example
///
/// ```
/// use rfc4648_base64url::try_decode_into;
///
/// let input: Vec<u16> = "_wA".encode_utf16().collect();
/// let mut dest = [0u8; 2];
/// assert_eq!(try_decode_into(&input, &mut dest), Ok(2));
/// assert_eq!(dest, [255, 0]);
/// ```
pub fn try_decode_into<U: CodeUnit>(input: &[U], dest: &mut [u8]) -> Result<usize, FormatError> {
    let length = input.len();
    if length % 4 == 1 {
        return Err(FormatError::TruncatedGroup { len: length });
    }
    let required = decoded_len(length);
    if dest.len() < required {
        return Err(FormatError::BufferTooSmall {
            required,
            available: dest.len(),
        });
    }

    let extra_length = length % 4;
    let base_length = length - extra_length;

    let mut i = 0;
    let mut j = 0;
    while i < base_length {
        let s0 = sextet(input, i)?;
        let s1 = sextet(input, i + 1)?;
        let s2 = sextet(input, i + 2)?;
        let s3 = sextet(input, i + 3)?;
        dest[j] = (s0 << 2) | (s1 >> 4);
        dest[j + 1] = (s1 << 4) | (s2 >> 2);
        dest[j + 2] = (s2 << 6) | s3;
        i += 4;
        j += 3;
    }

    if extra_length == 2 {
        let s0 = sextet(input, base_length)?;
        let s1 = sextet(input, base_length + 1)?;
        dest[j] = (s0 << 2) | (s1 >> 4);
        j += 1;
    } else if extra_length == 3 {
        let s0 = sextet(input, base_length)?;
        let s1 = sextet(input, base_length + 1)?;
        let s2 = sextet(input, base_length + 2)?;
        dest[j] = (s0 << 2) | (s1 >> 4);
        dest[j + 1] = (s1 << 4) | (s2 >> 2);
        j += 2;
    }

    Ok(j)
}

/// Decodes base64url text into `dest`, ignoring trailing `=` padding.
///
/// `dest` must hold [`decoded_len`] of the unpadded length.
pub fn try_decode_str_into(input: &str, dest: &mut [u8]) -> Result<usize, FormatError> {
    try_decode_into(input.trim_end_matches(PAD).as_bytes(), dest)
}

/// Appends the bytes decoded from `input` to `out`.
///
/// On failure `out` keeps its original contents.
pub fn decode_append(input: &str, out: &mut Vec<u8>) -> Result<usize, FormatError> {
    let trimmed = input.trim_end_matches(PAD);
    let start = out.len();
    out.resize(start + decoded_len(trimmed.len()), 0);
    try_decode_into(trimmed.as_bytes(), &mut out[start..]).inspect_err(|_| out.truncate(start))
}

/// Decodes base64url text, padded or not.
///
/// # Errors
///
/// [`DecodeError::NullInput`] when `input` is `None`, and
/// [`DecodeError::Format`] when it is not valid base64url.
///
/// # Example
///
/// ```
/// use rfc4648_base64url::decode;
///
/// assert_eq!(decode("AA==").unwrap(), [0x00]);
/// assert_eq!(decode("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// ```
pub fn decode<'a>(input: impl Into<Option<&'a str>>) -> Result<Vec<u8>, DecodeError> {
    let Some(input) = input.into() else {
        trace!("base64url decode called without input");
        return Err(DecodeError::NullInput);
    };
    let mut out = Vec::new();
    decode_append(input, &mut out).map_err(|err| {
        trace!(%err, len = input.len(), "rejected base64url input");
        err
    })?;
    Ok(out)
}

/// Decodes base64url text, returning `None` for absent or malformed input.
pub fn try_decode<'a>(input: impl Into<Option<&'a str>>) -> Option<Vec<u8>> {
    decode(input).ok()
}
