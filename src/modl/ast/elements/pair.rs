//! Pair element
//!
//! A pair binds a key to a value: `a=b`, `"a"=1`, or the implicit form `x(a=b)` where the `=`
//! before a map or array is left out. Keys keep their literal text like any other string.

use super::super::traits::AstNode;
use super::value::Value;
use crate::modl::token::{Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// The key of a pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    PlainString(String),
    Quoted(String),
}

impl Key {
    /// Build a key from a STRING, BRACED or QUOTED token
    pub fn from_token(token: &Token) -> Option<Key> {
        let text = token.value.as_text()?.to_string();
        match token.kind {
            TokenKind::Quoted => Some(Key::Quoted(text)),
            TokenKind::String | TokenKind::Braced => Some(Key::PlainString(text)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Key::PlainString(text) | Key::Quoted(text) => text,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key bound to a value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pair {
    pub key: Key,
    pub value: Box<Value>,
}

impl Pair {
    pub fn new(key: Key, value: Value) -> Self {
        Self {
            key,
            value: Box::new(value),
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl AstNode for Pair {
    fn node_type(&self) -> &'static str {
        "Pair"
    }

    fn display_label(&self) -> String {
        self.key.to_string()
    }
}
