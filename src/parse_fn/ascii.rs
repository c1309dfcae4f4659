/// Replacement for bytes outside 7-bit ASCII.
pub const REPLACEMENT: char = '?';

/// Decodes bytes as single-byte ASCII code points.
///
/// NULs and trailing bytes are kept as they are. Bytes above 0x7F have no
/// ASCII meaning and become [`REPLACEMENT`].
pub fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { REPLACEMENT })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_nul_and_trailing_bytes() {
        assert_eq!(decode_ascii(b"Acme\0junk"), "Acme\0junk");
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        assert_eq!(decode_ascii(&[b'C', 0xA9, b' ', 0xFF]), "C? ?");
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode_ascii(&[]), "");
    }
}
