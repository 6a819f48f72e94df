//! Classification of scanned text into number, keyword or string tokens
//!
//! The integer and float grammars are applied to the trimmed token text in that order, followed
//! by the `null`/`true`/`false` keywords. Text that matches none of them keeps the lexical kind
//! chosen by the scanner.

use crate::modl::token::{TokenKind, TokenValue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional minus, then `0` or a digit run without leading zeros
static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?(?:0|[1-9][0-9]*)$").unwrap());

/// Integer mantissa, optional fraction, optional exponent
static FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?$").unwrap()
});

/// Decide the final kind and value for a scanned token
///
/// `lexical` is the kind the scanner assigned from the first character (QUOTED, BRACED or
/// STRING). Integers outside the `i64` range fall through to the float grammar.
pub fn classify(lexical: TokenKind, text: &str) -> (TokenKind, TokenValue) {
    if INTEGER_REGEX.is_match(text) {
        if let Ok(value) = text.parse::<i64>() {
            return (TokenKind::Integer, TokenValue::Integer(value));
        }
    }
    if FLOAT_REGEX.is_match(text) {
        if let Ok(value) = text.parse::<f64>() {
            return (TokenKind::Float, TokenValue::Float(value));
        }
    }
    match text {
        "null" => (TokenKind::Null, TokenValue::Null),
        "true" => (TokenKind::True, TokenValue::Bool(true)),
        "false" => (TokenKind::False, TokenValue::Bool(false)),
        _ => (lexical, TokenValue::Text(text.to_string())),
    }
}
