//! Scanning rules for multi-character tokens
//!
//!     Each scanner is a pure function from the input and the start offset of a token to the
//!     end offset of that token. None of them keep state between calls; the logos lexer in
//!     [base_tokenization](super::base_tokenization) calls them from its callbacks and bumps
//!     past whatever they consumed.
//!
//! Escapes
//!
//!     `\` and `~` are both escape characters. A terminator directly after an escape character
//!     does not end the token, unless the escape character is itself escaped:
//!
//!         "a\"b"     one token, the inner quote is escaped
//!         "a\\"      one token, the escape is escaped so the quote terminates
//!         {~}}       one token `{~}}`, the first `}` is escaped
//!
//!     Only the two characters before the terminator are inspected, and never a character that
//!     lies before the start of the token. Escapes are not decoded here; token text keeps them.
//!
//!     All terminators are ASCII, so the scanners work on bytes: a UTF-8 continuation byte can
//!     never be mistaken for a terminator, and every offset they return lies on a char boundary.

/// Characters that end a bare (unquoted) string
pub const BARE_TERMINATORS: &[u8] = b"[]();\"=`{";

pub fn is_escape(byte: u8) -> bool {
    byte == b'\\' || byte == b'~'
}

/// Whether the byte at `at` is protected by an escape character
///
/// The byte before the token start is treated as a space.
pub fn is_escaped(bytes: &[u8], start: usize, at: usize) -> bool {
    if at <= start || !is_escape(bytes[at - 1]) {
        return false;
    }
    let before_escape = if at >= start + 2 { bytes[at - 2] } else { b' ' };
    !is_escape(before_escape)
}

/// Scan a quoted or braced literal opened at `start`
///
/// Returns the offset just past the closing `terminator`, or `None` when the input ends first.
pub fn scan_quoted(source: &str, start: usize, terminator: u8) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut end = start + 1;
    while end < bytes.len() {
        if bytes[end] == terminator && !is_escaped(bytes, start, end) {
            return Some(end + 1);
        }
        end += 1;
    }
    None
}

/// Scan a bare string starting at `start`
///
/// The first character always belongs to the token. Returns the offset of the first unescaped
/// terminator, or the end of input.
pub fn scan_bare(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();
    let mut end = start + 1;
    while end < bytes.len() {
        if BARE_TERMINATORS.contains(&bytes[end]) && !is_escaped(bytes, start, end) {
            break;
        }
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_quoted_simple() {
        assert_eq!(scan_quoted("\"abc\"", 0, b'"'), Some(5));
        assert_eq!(scan_quoted("x=`b` rest", 2, b'`'), Some(5));
    }

    #[test]
    fn test_scan_quoted_unclosed() {
        assert_eq!(scan_quoted("\"abc", 0, b'"'), None);
        assert_eq!(scan_quoted("{hello", 0, b'}'), None);
    }

    #[test]
    fn test_scan_quoted_escaped_terminator() {
        // "a\"b"
        assert_eq!(scan_quoted(r#""a\"b""#, 0, b'"'), Some(6));
        // "a~"b"
        assert_eq!(scan_quoted(r#""a~"b""#, 0, b'"'), Some(6));
    }

    #[test]
    fn test_scan_quoted_escaped_escape_terminates() {
        // "a\\" closes on the last quote
        assert_eq!(scan_quoted(r#""a\\" tail"#, 0, b'"'), Some(5));
        // {~~} closes on the brace
        assert_eq!(scan_quoted("{~~}", 0, b'}'), Some(4));
    }

    #[test]
    fn test_scan_braced_escape_after_opener() {
        // The opener is never an escape, so `{\}}` ends on the second brace
        assert_eq!(scan_quoted(r"{\}}", 0, b'}'), Some(4));
        assert_eq!(scan_quoted("{~}}", 0, b'}'), Some(4));
    }

    #[test]
    fn test_scan_bare_stops_at_terminators() {
        assert_eq!(scan_bare("hello=world", 0), 5);
        assert_eq!(scan_bare("abc;", 0), 3);
        assert_eq!(scan_bare("a{b}", 0), 1);
        assert_eq!(scan_bare("abc", 0), 3);
    }

    #[test]
    fn test_scan_bare_includes_inner_whitespace() {
        assert_eq!(scan_bare("one two ;", 0), 8);
    }

    #[test]
    fn test_scan_bare_escaped_terminator() {
        assert_eq!(scan_bare(r"a\=b=c", 0), 4);
        assert_eq!(scan_bare(r"a~;b;", 0), 4);
        // An escaped escape does not protect the terminator
        assert_eq!(scan_bare(r"a\\=b", 0), 3);
    }

    #[test]
    fn test_scan_bare_multibyte() {
        let source = "héllo=1";
        assert_eq!(scan_bare(source, 0), 6);
        assert_eq!(&source[..6], "héllo");
    }

    #[test]
    fn test_is_escaped_ignores_bytes_before_start() {
        let bytes = br"\;";
        assert!(!is_escaped(bytes, 1, 1));
    }
}
