//! Common lexer module
//!
//! Errors shared by the lexer stages.

use std::fmt;
use std::ops::Range;

/// Errors that can occur during tokenization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quoted or braced literal reached the end of input without its closing delimiter
    UnclosedQuote {
        delimiter: char,
        span: Range<usize>,
    },
    /// Input the scanner could not assign to any token
    UnexpectedCharacter { span: Range<usize> },
}

impl TokenizeError {
    pub fn span(&self) -> Range<usize> {
        match self {
            TokenizeError::UnclosedQuote { span, .. } => span.clone(),
            TokenizeError::UnexpectedCharacter { span } => span.clone(),
        }
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::UnclosedQuote { delimiter, span } => {
                write!(
                    f,
                    "Unclosed quote: {} near {}:{}",
                    delimiter, span.start, span.end
                )
            }
            TokenizeError::UnexpectedCharacter { span } => {
                write!(f, "Unexpected character near {}:{}", span.start, span.end)
            }
        }
    }
}

impl std::error::Error for TokenizeError {}
