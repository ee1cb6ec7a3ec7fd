/// Lowercase base16 alphabet.
pub const ALPHABET_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Uppercase base16 alphabet.
pub const ALPHABET_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Marks a byte that is not a hex digit in [`DECODE_MAP`].
pub(crate) const INVALID: i8 = -1;

/// Maps a byte to its nibble value, accepting both letter cases.
pub(crate) static DECODE_MAP: [i8; 256] = {
    let mut map = [INVALID; 256];
    let mut i = 0;
    while i < 16 {
        map[ALPHABET_LOWER[i] as usize] = i as i8;
        map[ALPHABET_UPPER[i] as usize] = i as i8;
        i += 1;
    }
    map
};
