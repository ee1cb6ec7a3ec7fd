//! URL-safe base64 encoding.

use rfc4648_core::CodeUnit;

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};
use crate::Padding;

/// Bytes encoded per stack round when appending to a `String`. A multiple
/// of 3, so only the final round can produce a partial group.
const CHUNK: usize = 255;

/// Capacity an encoding destination must have: `ceil(len / 3) * 4`.
///
/// This is required even when padding is omitted.
pub fn max_encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Exact number of characters written when encoding `len` bytes.
pub fn encoded_len(len: usize, padding: Padding) -> usize {
    match (padding, len % 3) {
        (Padding::Include, _) | (Padding::Omit, 0) => max_encoded_len(len),
        (Padding::Omit, extra) => len / 3 * 4 + extra + 1,
    }
}

#[inline]
fn symbol<U: CodeUnit>(sextet: u8) -> U {
    U::from_ascii(ALPHABET_BYTES[sextet as usize])
}

/// Encodes `bytes` into `dest` without allocating.
///
/// Returns the number of characters written, or `None` (leaving `dest`
/// untouched) when `dest` is shorter than [`max_encoded_len`].
///
/// # Example
///
/// ```
/// use rfc4648_base64url::{try_encode_into, Padding};
///
/// let mut dest = [0u8; 4];
/// assert_eq!(try_encode_into(&[250], &mut dest, Padding::Omit), Some(2));
/// assert_eq!(&dest[..2], b"-g");
/// assert_eq!(try_encode_into(&[250], &mut dest, Padding::Include), Some(4));
/// assert_eq!(&dest, b"-g==");
/// ```
pub fn try_encode_into<U: CodeUnit>(
    bytes: &[u8],
    dest: &mut [U],
    padding: Padding,
) -> Option<usize> {
    let length = bytes.len();
    if dest.len() < max_encoded_len(length) {
        return None;
    }

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    let mut offset = 0;
    while i < base_length {
        let o1 = bytes[i];
        let o2 = bytes[i + 1];
        let o3 = bytes[i + 2];
        dest[offset] = symbol(o1 >> 2);
        dest[offset + 1] = symbol(((o1 & 0b11) << 4) | (o2 >> 4));
        dest[offset + 2] = symbol(((o2 & 0b1111) << 2) | (o3 >> 6));
        dest[offset + 3] = symbol(o3 & 0b11_1111);
        offset += 4;
        i += 3;
    }

    if extra_length == 1 {
        let o1 = bytes[base_length];
        dest[offset] = symbol(o1 >> 2);
        dest[offset + 1] = symbol((o1 & 0b11) << 4);
        offset += 2;
        if padding == Padding::Include {
            dest[offset] = U::from_ascii(PAD_BYTE);
            dest[offset + 1] = U::from_ascii(PAD_BYTE);
            offset += 2;
        }
    } else if extra_length == 2 {
        let o1 = bytes[base_length];
        let o2 = bytes[base_length + 1];
        dest[offset] = symbol(o1 >> 2);
        dest[offset + 1] = symbol(((o1 & 0b11) << 4) | (o2 >> 4));
        dest[offset + 2] = symbol((o2 & 0b1111) << 2);
        offset += 3;
        if padding == Padding::Include {
            dest[offset] = U::from_ascii(PAD_BYTE);
            offset += 1;
        }
    }

    Some(offset)
}

/// Appends the encoding of `bytes` to `out`.
pub fn encode_append(bytes: &[u8], out: &mut String, padding: Padding) {
    out.reserve(encoded_len(bytes.len(), padding));
    let mut buf = [0u8; CHUNK / 3 * 4];
    for chunk in bytes.chunks(CHUNK) {
        let written = try_encode_into(chunk, &mut buf, padding).unwrap_or_default();
        out.extend(buf[..written].iter().map(|&b| char::from(b)));
    }
}

/// Encodes `bytes` as a URL-safe base64 string.
///
/// # Example
///
/// ```
/// use rfc4648_base64url::{encode, Padding};
///
/// assert_eq!(encode(b"hello world", Padding::Omit), "aGVsbG8gd29ybGQ");
/// assert_eq!(encode(&[255, 0], Padding::Include), "_wA=");
/// ```
pub fn encode(bytes: &[u8], padding: Padding) -> String {
    let mut out = String::new();
    encode_append(bytes, &mut out, padding);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"", Padding::Omit), "");
        assert_eq!(encode(b"", Padding::Include), "");
        assert_eq!(try_encode_into::<u8>(b"", &mut [], Padding::Include), Some(0));
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(encode(b"f", Padding::Include), "Zg==");
        assert_eq!(encode(b"fo", Padding::Include), "Zm8=");
        assert_eq!(encode(b"foo", Padding::Include), "Zm9v");
        assert_eq!(encode(b"foob", Padding::Include), "Zm9vYg==");
        assert_eq!(encode(b"fooba", Padding::Include), "Zm9vYmE=");
        assert_eq!(encode(b"foobar", Padding::Include), "Zm9vYmFy");
        assert_eq!(encode(b"f", Padding::Omit), "Zg");
        assert_eq!(encode(b"fo", Padding::Omit), "Zm8");
        assert_eq!(encode(b"fooba", Padding::Omit), "Zm9vYmE");
    }

    #[test]
    fn test_url_safe_symbols() {
        assert_eq!(encode(&[250], Padding::Omit), "-g");
        assert_eq!(encode(&[255, 0], Padding::Include), "_wA=");
        assert_eq!(encode(&[0xfb, 0xff], Padding::Omit), "-_8");
    }

    #[test]
    fn test_lengths() {
        for len in 0..10 {
            assert_eq!(encode(&vec![0u8; len], Padding::Omit).len(), encoded_len(len, Padding::Omit));
            assert_eq!(
                encode(&vec![0u8; len], Padding::Include).len(),
                encoded_len(len, Padding::Include)
            );
        }
        assert_eq!(max_encoded_len(0), 0);
        assert_eq!(max_encoded_len(1), 4);
        assert_eq!(max_encoded_len(3), 4);
        assert_eq!(max_encoded_len(4), 8);
    }

    #[test]
    fn test_capacity_ignores_padding_flag() {
        // One byte writes two characters unpadded but still needs room for four.
        let mut dest = [0u8; 3];
        assert_eq!(try_encode_into(&[1], &mut dest, Padding::Omit), None);
        assert_eq!(dest, [0; 3]);
    }

    #[test]
    fn test_append_spans_chunks() {
        let data: Vec<u8> = (0..CHUNK * 3 + 2).map(|i| i as u8).collect();
        let mut out = String::new();
        encode_append(&data, &mut out, Padding::Include);
        assert_eq!(out.len(), max_encoded_len(data.len()));
        assert!(out.ends_with('='));
        assert_eq!(out.matches('=').count(), 1);
    }
}
