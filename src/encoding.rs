//! Decoding uploaded bytes into markup text.
//!
//! A byte-order mark decides first. Without one, a `<meta charset>` or
//! `http-equiv` declaration in the first 1024 bytes is honored (when
//! enabled), and UTF-8 is the fallback. Decoding never fails: invalid
//! sequences become U+FFFD.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Encoding declared in the markup head, if any and if recognized.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(1024)]);

    [&*CONTENT_TYPE_CHARSET_RE, &*CHARSET_META_RE]
        .iter()
        .filter_map(|re| re.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
}

/// Decode markup bytes to a string.
///
/// Returns the text and the encoding actually used. The BOM, if present,
/// is stripped from the text.
#[must_use]
pub fn decode_html(bytes: &[u8], sniff_meta_charset: bool) -> (String, &'static Encoding) {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        let (text, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
        return (text.into_owned(), encoding);
    }

    let encoding = if sniff_meta_charset {
        declared_encoding(bytes).unwrap_or(UTF_8)
    } else {
        UTF_8
    };

    // A page cannot meaningfully declare itself UTF-16 without a BOM.
    let encoding = encoding.output_encoding();
    let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
    (text.into_owned(), encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passthrough() {
        let (text, encoding) = decode_html(b"<html><body>Hello, World!</body></html>", true);
        assert_eq!(text, "<html><body>Hello, World!</body></html>");
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn bom_wins_over_declaration() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<meta charset=\"windows-1252\"><p>Café</p>".as_bytes());
        let (text, encoding) = decode_html(&bytes, true);
        assert_eq!(encoding, UTF_8);
        assert!(text.starts_with("<meta"));
        assert!(text.contains("Café"));
    }

    #[test]
    fn utf16_bom_is_decoded() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "<p>Été</p>".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (text, encoding) = decode_html(&bytes, false);
        assert_eq!(encoding.name(), "UTF-16LE");
        assert_eq!(text, "<p>Été</p>");
    }

    #[test]
    fn meta_charset_is_honored() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let (text, encoding) = decode_html(html, true);
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(encoding.name(), "windows-1252");
        assert!(text.contains("Café"));
    }

    #[test]
    fn meta_charset_ignored_when_disabled() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        let (text, encoding) = decode_html(html, false);
        assert_eq!(encoding, UTF_8);
        assert!(text.contains("Caf\u{FFFD}"));
    }

    #[test]
    fn content_type_declaration_is_honored() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1252">"#;
        assert_eq!(declared_encoding(html).map(Encoding::name), Some("windows-1252"));
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let (_, encoding) = decode_html(b"<meta charset=\"klingon\"><p>x</p>", true);
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn declared_utf16_without_bom_reads_as_utf8() {
        let (text, encoding) = decode_html(b"<meta charset=\"utf-16\"><p>x</p>", true);
        assert_eq!(encoding, UTF_8);
        assert!(text.contains("<p>x</p>"));
    }

    #[test]
    fn invalid_bytes_are_replaced() {
        let (text, _) = decode_html(b"<body>Test \xFF\xFE Invalid</body>", false);
        assert!(text.contains("Test"));
        assert!(text.contains("Invalid"));
        assert!(text.contains('\u{FFFD}'));
    }
}
