use crate::dom::DomProperty;
use std::collections::HashMap;
use std::fmt::Write;

/// Longest run of escaped characters kept in one string literal.
const SEGMENT_LENGTH: usize = 1024;

/// Encodes `text` as a C++ string literal, see [`fix_bytes`].
pub fn fix_string(text: &str, indent: &str) -> String {
    fix_bytes(text.as_bytes(), indent)
}

/// Encodes raw bytes as one or more adjacent C++ string literals.
///
/// Backslashes and quotes are escaped, CR is dropped, LF becomes `\n` followed by a
/// literal break, and non-ASCII bytes become octal escapes. Control bytes are
/// written as three-digit octal escapes so that a following digit cannot extend
/// them. Once a segment grows beyond 1024 characters a new literal is started on a
/// fresh line indented by `indent` twice.
pub fn fix_bytes(bytes: &[u8], indent: &str) -> String {
    let mut segments = vec![];
    let mut cur = String::new();
    for &b in bytes {
        match b {
            b'\\' => cur.push_str("\\\\"),
            b'"' => cur.push_str("\\\""),
            b'\r' => {}
            b'\n' => cur.push_str("\\n\"\n\""),
            0x80.. => {
                let _ = write!(cur, "\\{b:o}");
            }
            0x00..=0x1f | 0x7f => {
                let _ = write!(cur, "\\{b:03o}");
            }
            _ => cur.push(b as char),
        }
        if cur.len() > SEGMENT_LENGTH {
            segments.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        segments.push(cur);
    }
    let joiner = format!("\"\n{indent}{indent}\"");
    format!("\"{}\"", segments.join(&joiner))
}

/// Maps property names to properties; later duplicates win.
pub fn property_map(properties: &[DomProperty]) -> HashMap<&str, &DomProperty> {
    properties.iter().map(|p| (p.name(), p)).collect()
}

/// `true` for the strings Designer writes for boolean flags (`notr`, ...).
pub fn to_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

/// Decodes hex digit pairs, skipping whitespace. A dangling digit is dropped.
pub fn decode_hex(text: &str) -> Vec<u8> {
    let digits: Vec<u8> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(16).unwrap_or(0) as u8)
        .collect();
    digits.chunks_exact(2).map(|pair| pair[0] << 4 | pair[1]).collect()
}

/// Upper-cases the first character: `text` becomes `Text`.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quote_newline_and_high_bytes() {
        assert_eq!(fix_bytes(&[b'"', b'\n', 0xff], "    "), "\"\\\"\\n\"\n\"\\377\"");
    }

    #[test]
    fn drops_carriage_returns() {
        assert_eq!(fix_string("a\r\nb\\", ""), "\"a\\n\"\n\"b\\\\\"");
    }

    #[test]
    fn pads_control_bytes() {
        assert_eq!(fix_bytes(&[1, b'7'], ""), "\"\\0017\"");
    }

    #[test]
    fn splits_long_literals() {
        let text = "x".repeat(2050);
        let lit = fix_string(&text, "  ");
        let parts: Vec<_> = lit.split("\"\n    \"").collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 1 + 1025);
        assert_eq!(parts[1].len(), 1025 + 1);
    }

    #[test]
    fn hex() {
        assert_eq!(decode_hex("89 50\n4e47"), vec![0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(decode_hex("abc"), vec![0xab]);
    }

    #[test]
    fn upper() {
        assert_eq!(upper_first("windowTitle"), "WindowTitle");
        assert_eq!(upper_first(""), "");
    }
}
