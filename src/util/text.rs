//! Character-offset helpers for block text
//!
//! Offsets throughout the crate count `char`s. Block text is stored as
//! UTF-8 `String`, so these helpers translate between the two.

use std::ops::Range;

/// Number of characters in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset to a byte offset, clamping to the end of `text`
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split `text` at a char offset
pub fn split_at_char(text: &str, char_offset: usize) -> (&str, &str) {
    text.split_at(char_to_byte(text, char_offset))
}

/// Borrow the chars in `range` (clamped to the text)
pub fn slice_chars(text: &str, range: Range<usize>) -> &str {
    let start = char_to_byte(text, range.start);
    let end = char_to_byte(text, range.end.max(range.start));
    &text[start..end]
}

/// Length in chars of the leading whitespace run. The byte order mark
/// U+FEFF counts as whitespace here, as it does for JavaScript's `trim`.
pub fn leading_whitespace_len(text: &str) -> usize {
    let rest = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    char_len(text) - char_len(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_byte_multibyte() {
        let text = "héllo";
        assert_eq!(char_to_byte(text, 0), 0);
        assert_eq!(char_to_byte(text, 2), 3);
        assert_eq!(char_to_byte(text, 5), 6);
        assert_eq!(char_to_byte(text, 99), 6);
    }

    #[test]
    fn test_split_at_char() {
        assert_eq!(split_at_char("héllo", 2), ("hé", "llo"));
        assert_eq!(split_at_char("abc", 10), ("abc", ""));
    }

    #[test]
    fn test_slice_chars() {
        assert_eq!(slice_chars("foo\nbar", 1..6), "oo\nba");
        assert_eq!(slice_chars("foo", 2..1), "");
        assert_eq!(slice_chars("foo", 1..50), "oo");
    }

    #[test]
    fn test_leading_whitespace_len() {
        assert_eq!(leading_whitespace_len("  abc"), 2);
        assert_eq!(leading_whitespace_len("\t x"), 2);
        assert_eq!(leading_whitespace_len("abc"), 0);
        assert_eq!(leading_whitespace_len("   "), 3);
        assert_eq!(leading_whitespace_len(""), 0);
        assert_eq!(leading_whitespace_len("\u{feff}\u{feff}x"), 2);
        assert_eq!(leading_whitespace_len(" \u{feff}\u{a0}x"), 3);
    }
}
