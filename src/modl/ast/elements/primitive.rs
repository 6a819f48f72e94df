//! Primitive element
//!
//! A primitive is a leaf scalar. Quoted and plain strings keep the exact token text,
//! delimiters included: `"a"` is stored as `"a"` with its quotes, `{x}` as `{x}`.
//! Braced strings are stored as plain strings.

use super::super::traits::AstNode;
use crate::modl::token::{Token, TokenKind, TokenValue};
use serde::Serialize;
use std::fmt;

/// The three keyword literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoolNull {
    True,
    False,
    Null,
}

impl BoolNull {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BoolNull::True => Some(true),
            BoolNull::False => Some(false),
            BoolNull::Null => None,
        }
    }
}

impl fmt::Display for BoolNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolNull::True => f.write_str("true"),
            BoolNull::False => f.write_str("false"),
            BoolNull::Null => f.write_str("null"),
        }
    }
}

/// A leaf scalar value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Quoted(String),
    Integer(i64),
    Float(f64),
    PlainString(String),
    BoolNull(BoolNull),
}

impl Primitive {
    /// Build the primitive a token stands for, or `None` for punctuation
    pub fn from_token(token: &Token) -> Option<Primitive> {
        let primitive = match (token.kind, &token.value) {
            (TokenKind::Null, _) => Primitive::BoolNull(BoolNull::Null),
            (TokenKind::True, _) => Primitive::BoolNull(BoolNull::True),
            (TokenKind::False, _) => Primitive::BoolNull(BoolNull::False),
            (TokenKind::Integer, TokenValue::Integer(value)) => Primitive::Integer(*value),
            (TokenKind::Float, TokenValue::Float(value)) => Primitive::Float(*value),
            (TokenKind::Quoted, TokenValue::Text(text)) => Primitive::Quoted(text.clone()),
            (TokenKind::String | TokenKind::Braced, TokenValue::Text(text)) => {
                Primitive::PlainString(text.clone())
            }
            _ => return None,
        };
        Some(primitive)
    }

    /// The literal text of a quoted or plain string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::Quoted(text) | Primitive::PlainString(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Primitive::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Integers widen to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Primitive::Float(value) => Some(*value),
            Primitive::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Primitive::BoolNull(keyword) => keyword.as_bool(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::BoolNull(BoolNull::Null))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Quoted(text) | Primitive::PlainString(text) => f.write_str(text),
            Primitive::Integer(value) => write!(f, "{}", value),
            Primitive::Float(value) => write!(f, "{}", value),
            Primitive::BoolNull(keyword) => write!(f, "{}", keyword),
        }
    }
}

impl AstNode for Primitive {
    fn node_type(&self) -> &'static str {
        match self {
            Primitive::Quoted(_) => "Quoted",
            Primitive::Integer(_) => "Integer",
            Primitive::Float(_) => "Float",
            Primitive::PlainString(_) => "PlainString",
            Primitive::BoolNull(_) => "BoolNull",
        }
    }

    fn display_label(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_token(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, TokenValue::Text(text.to_string()), 0..text.len())
    }

    #[test]
    fn test_from_token() {
        assert_eq!(
            Primitive::from_token(&text_token(TokenKind::Quoted, "`a`")),
            Some(Primitive::Quoted("`a`".to_string()))
        );
        assert_eq!(
            Primitive::from_token(&text_token(TokenKind::Braced, "{a}")),
            Some(Primitive::PlainString("{a}".to_string()))
        );
        assert_eq!(
            Primitive::from_token(&Token::new(TokenKind::Null, TokenValue::Null, 0..4)),
            Some(Primitive::BoolNull(BoolNull::Null))
        );
        assert_eq!(
            Primitive::from_token(&text_token(TokenKind::Equals, "=")),
            None
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Primitive::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Primitive::Float(2.5).as_i64(), None);
        assert_eq!(Primitive::BoolNull(BoolNull::False).as_bool(), Some(false));
        assert!(Primitive::BoolNull(BoolNull::Null).is_null());
        assert_eq!(Primitive::Quoted("\"q\"".into()).as_str(), Some("\"q\""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Primitive::PlainString("{hello}".into()).to_string(), "{hello}");
        assert_eq!(Primitive::Float(2.54).to_string(), "2.54");
        assert_eq!(Primitive::BoolNull(BoolNull::True).to_string(), "true");
    }
}
