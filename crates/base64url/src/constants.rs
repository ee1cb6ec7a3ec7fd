/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe base64 alphabet as a byte array.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: char = '=';

pub(crate) const PAD_BYTE: u8 = b'=';

pub(crate) const INVALID: i8 = -1;

/// Maps a byte to its sextet value, or [`INVALID`].
pub(crate) static DECODE_MAP: [i8; 256] = {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        map[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    map
};
