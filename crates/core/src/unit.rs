//! Character code units the codecs read from and write into.

/// A single character of encoded text.
///
/// Encoders only ever produce ASCII, so any unit type that can hold a byte
/// works as an output buffer element. Decoders only accept units whose value
/// fits in one byte; anything wider is invalid input.
pub trait CodeUnit: Copy {
    /// Converts an ASCII byte produced by an encoder.
    fn from_ascii(byte: u8) -> Self;

    /// Returns the unit as a byte, or `None` if its high byte is non-zero.
    fn to_byte(self) -> Option<u8>;
}

impl CodeUnit for u8 {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte
    }

    #[inline]
    fn to_byte(self) -> Option<u8> {
        Some(self)
    }
}

/// UTF-16 code units.
impl CodeUnit for u16 {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }

    #[inline]
    fn to_byte(self) -> Option<u8> {
        u8::try_from(self).ok()
    }
}

impl CodeUnit for char {
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }

    #[inline]
    fn to_byte(self) -> Option<u8> {
        u8::try_from(self).ok()
    }
}
