//! Base16 encoding.

use rfc4648_core::CodeUnit;

use crate::Case;

/// Bytes encoded per stack round when appending to a `String`.
const CHUNK: usize = 256;

/// Number of characters needed to encode `len` bytes.
pub fn encoded_len(len: usize) -> usize {
    len * 2
}

/// Encodes `bytes` into `dest` without allocating.
///
/// Each byte becomes two characters, high nibble first. Returns the number
/// of characters written, or `None` (leaving `dest` untouched) when `dest`
/// holds fewer than `2 * bytes.len()` units.
///
/// # Example
///
/// ```
/// use rfc4648_base16::{try_encode_into, Case};
///
/// let mut dest = [0u16; 4];
/// assert_eq!(try_encode_into(&[0x0f, 0xf0], &mut dest, Case::Lower), Some(4));
/// assert_eq!(String::from_utf16_lossy(&dest), "0ff0");
/// ```
pub fn try_encode_into<U: CodeUnit>(bytes: &[u8], dest: &mut [U], case: Case) -> Option<usize> {
    let required = encoded_len(bytes.len());
    if dest.len() < required {
        return None;
    }

    let alphabet = case.alphabet();
    for (&byte, pair) in bytes.iter().zip(dest.chunks_exact_mut(2)) {
        pair[0] = U::from_ascii(alphabet[(byte >> 4) as usize]);
        pair[1] = U::from_ascii(alphabet[(byte & 0x0f) as usize]);
    }

    Some(required)
}

/// Appends the encoding of `bytes` to `out`.
///
/// Lets a caller reuse one `String` across many encodings.
pub fn encode_append(bytes: &[u8], out: &mut String, case: Case) {
    out.reserve(encoded_len(bytes.len()));
    let mut buf = [0u8; CHUNK * 2];
    for chunk in bytes.chunks(CHUNK) {
        let written = try_encode_into(chunk, &mut buf, case).unwrap_or_default();
        out.extend(buf[..written].iter().map(|&b| char::from(b)));
    }
}

/// Encodes `bytes` as a base16 string.
///
/// # Example
///
/// ```
/// use rfc4648_base16::{encode, Case};
///
/// assert_eq!(encode(&[0x0f, 0xf0], Case::Lower), "0ff0");
/// assert_eq!(encode(&[0xab], Case::Upper), "AB");
/// ```
pub fn encode(bytes: &[u8], case: Case) -> String {
    let mut out = String::new();
    encode_append(bytes, &mut out, case);
    out
}
