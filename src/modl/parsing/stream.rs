//! Token stream
//!
//! A forward cursor over the lexer output with a push-back buffer in front of it. The parser is
//! its only consumer. Productions that need one token of lookahead beyond [TokenStream::peek]
//! consume a token and push it back when they decline.

use crate::modl::token::Token;
use std::vec::IntoIter;

#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: IntoIter<Token>,
    /// Tokens returned by the parser, most recent last; served before `tokens`
    pushed_back: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            pushed_back: Vec::new(),
        }
    }

    /// Remove and return the first remaining token
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        self.pushed_back.pop().or_else(|| self.tokens.next())
    }

    /// The first remaining token, without consuming it
    pub fn peek(&self) -> Option<&Token> {
        self.pushed_back
            .last()
            .or_else(|| self.tokens.as_slice().first())
    }

    /// Put a token back in front of the stream
    pub fn push_back(&mut self, token: Token) {
        self.pushed_back.push(token);
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of tokens remaining
    pub fn len(&self) -> usize {
        self.pushed_back.len() + self.tokens.len()
    }
}
