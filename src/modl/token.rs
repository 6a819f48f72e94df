//! Core token types shared by the lexer, the token stream and the parser.
//!
//!     A token is the immutable result of one lexer step: a kind tag, the decoded value and the
//!     byte range of its source text. Values are decoded once, at lex time. Numbers are already
//!     `i64`/`f64`, keywords are already `null`/`bool`, and everything else keeps its raw text,
//!     delimiters included. Nothing downstream reclassifies a token.
//!
//!     Spans are byte offsets into the original input. For bare strings the span may include
//!     trailing whitespace (a bare scan runs up to the next structural character) while the
//!     value is trimmed. The spans of a token sequence are ordered and never overlap, and the
//!     gaps between them hold only whitespace.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Separator,
    Equals,
    Null,
    True,
    False,
    Quoted,
    Braced,
    String,
    Integer,
    Float,
}

impl TokenKind {
    /// Brackets, parentheses, `;` and `=`
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Separator
                | TokenKind::Equals
        )
    }

    /// Tokens that may stand as a map or pair key
    pub fn is_key_candidate(&self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Quoted | TokenKind::Braced
        )
    }

    /// Tokens that open a nested map or array
    pub fn is_opener(&self) -> bool {
        matches!(self, TokenKind::LParen | TokenKind::LBracket)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Equals => "EQUALS",
            TokenKind::Null => "NULL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Quoted => "QUOTED",
            TokenKind::Braced => "BRACED",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decoded value carried by a token
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TokenValue {
    /// The text of a textual token (quoted, braced, bare or punctuation)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Null => f.write_str("null"),
            TokenValue::Bool(value) => write!(f, "{}", value),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
            TokenValue::Text(text) => f.write_str(text),
        }
    }
}

/// A lexical unit with its source location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, span: Range<usize>) -> Self {
        Self { kind, value, span }
    }

    /// Text value of a textual token, empty for numbers and keywords
    pub fn text(&self) -> &str {
        self.value.as_text().unwrap_or("")
    }

    /// The raw source slice this token was read from, including any trailing whitespace
    pub fn source_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, from: {}, to: {}, value: \"{}\"",
            self.kind, self.span.start, self.span.end, self.value
        )
    }
}
