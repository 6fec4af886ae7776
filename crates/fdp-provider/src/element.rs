/// Single-byte element types a consumed blob can be reinterpreted as.
///
/// The conversion is bit-preserving: `0x8A` becomes `0x8Au8` or `-118i8`.
pub trait ByteElement: Copy {
    fn from_byte(byte: u8) -> Self;
}

impl ByteElement for u8 {
    fn from_byte(byte: u8) -> Self {
        byte
    }
}

impl ByteElement for i8 {
    fn from_byte(byte: u8) -> Self {
        i8::from_ne_bytes([byte])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_reinterpretation() {
        assert_eq!(i8::from_byte(0x8A), -118);
        assert_eq!(i8::from_byte(0x7F), 127);
        assert_eq!(u8::from_byte(0x8A), 0x8A);
    }
}
