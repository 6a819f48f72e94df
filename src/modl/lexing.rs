//! Lexer
//!
//!     This module turns MODL source text into a flat vector of [Token]s in a single left to
//!     right pass. The output is consumed by the [TokenStream](crate::modl::parsing::TokenStream)
//!     and nothing else.
//!
//! The Lexing Stages
//!
//!     1. Base tokenization with logos. See [base_tokenization](base_tokenization).
//!        Whitespace between tokens is skipped; punctuation becomes single character tokens and
//!        the first character of any other token selects a scanner.
//!
//!     2. Scanning. See [scanning](scanning). Quoted (`"`, `` ` ``), braced (`{`) and bare tokens
//!        are extended by pure functions that implement the doubled-escape rule.
//!
//!     3. Classification. See [classification](classification). The trimmed text of a scanned
//!        token is tested against the integer and float grammars and the three keywords.
//!
//! Source Preservation
//!
//!     Textual token values keep their delimiters and escapes verbatim. The lexer never decodes
//!     content: `"a\"b"` is the value of the token, quotes included. Spans cover every
//!     non-whitespace byte of the input exactly once.

pub mod base_tokenization;
pub mod classification;
pub mod common;
pub mod scanning;

pub use base_tokenization::tokenize;
pub use common::TokenizeError;
// Re-export token types for consumers that import them from `lexing`
pub use crate::modl::token::{Token, TokenKind, TokenValue};
