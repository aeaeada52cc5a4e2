//! Hex to text conversion.

use tracing::trace;

use crate::{encoding::TextEncoding, error::TextFmtResult};

/// Strips an optional `0x`/`0X` prefix and all whitespace from hex input.
pub fn strip_hex_input(s: &str) -> String {
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    s.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .collect()
}

/// Decodes a hex string to bytes, after [`strip_hex_input`].
///
/// # Errors
///
/// Returns [`crate::TextFmtError::InvalidHex`] on odd length or non-hex
/// characters.
pub fn decode_hex(s: &str) -> TextFmtResult<Vec<u8>> {
    let cleaned = strip_hex_input(s);
    let bytes = hex::decode(&cleaned)?;
    trace!(hex_len = cleaned.len(), byte_len = bytes.len(), "decoded hex");
    Ok(bytes)
}

/// Decodes a hex string to text in the given encoding.
///
/// Invalid sequences are replaced rather than rejected. NUL characters are
/// dropped and surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns [`crate::TextFmtError::InvalidHex`] if the input is not hex.
pub fn hex_to_text(s: &str, encoding: TextEncoding) -> TextFmtResult<String> {
    let bytes = decode_hex(s)?;
    let text = encoding.decode_lossy(&bytes);
    Ok(text.replace('\0', "").trim().to_owned())
}

/// Checks if some text looks like it is hex-encoded.
///
/// That is either it has a `0x`/`0X` prefix, or it consists only of hex
/// digits once spaces are removed. Text made only of spaces counts as hex.
pub fn looks_like_hex(s: &str) -> bool {
    s.starts_with("0x")
        || s.starts_with("0X")
        || s.chars().filter(|&c| c != ' ').all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::TextFmtError;

    #[test]
    fn test_strip_hex_input() {
        assert_eq!(strip_hex_input("0x68 65\n6c\t6c\r\n6f"), "68656c6c6f");
        assert_eq!(strip_hex_input("0XABCD"), "ABCD");
        // Only one prefix is removed.
        assert_eq!(strip_hex_input("0x0x00"), "0x00");
    }

    #[test]
    fn test_hex_to_text() {
        let text = hex_to_text("68656c6c6f", TextEncoding::Utf8).unwrap();
        assert_eq!(text, "hello");

        let text = hex_to_text("0x 68 65 6c 6c 6f", TextEncoding::Utf8).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_hex_to_text_strips_nul_and_whitespace() {
        let text = hex_to_text("20006869000a", TextEncoding::Utf8).unwrap();
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_hex_to_text_replaces_invalid() {
        let text = hex_to_text("61ff62", TextEncoding::Utf8).unwrap();
        assert_eq!(text, "a\u{fffd}b");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            decode_hex("abc"),
            Err(TextFmtError::InvalidHex(hex::FromHexError::OddLength))
        ));
        assert!(matches!(
            decode_hex("zz"),
            Err(TextFmtError::InvalidHex(hex::FromHexError::InvalidHexCharacter { .. }))
        ));
    }

    #[test]
    fn test_looks_like_hex() {
        assert!(looks_like_hex("deadBEEF"));
        assert!(looks_like_hex("de ad be ef"));
        assert!(looks_like_hex("0xnot really"));
        assert!(looks_like_hex("   "));
        assert!(!looks_like_hex("hello"));
        assert!(!looks_like_hex("STS|abc"));
    }

    proptest! {
        #[test]
        fn prop_hex_to_text_matches_direct_decode(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            for encoding in [TextEncoding::Utf8, TextEncoding::Latin1, TextEncoding::Utf16Le] {
                let direct = encoding.decode_lossy(&bytes).replace('\0', "").trim().to_owned();
                let via_hex = hex_to_text(&hex::encode(&bytes), encoding).unwrap();
                prop_assert_eq!(via_hex, direct);
            }
        }
    }
}
