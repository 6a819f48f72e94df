//! Parsing module for MODL
//!
//! Turns the token sequence produced by [lexing](crate::modl::lexing) into a
//! [Document](crate::modl::ast::Document). The parser sees tokens only; source text and
//! positions reach it through the token spans.
//!
//! - `stream`: cursor over the tokens with push-back
//! - `parser`: the recursive-descent productions
//! - `limits`: nesting depth bound
//! - `common`: errors and the production result type

pub mod common;
pub mod limits;
pub mod parser;
pub mod stream;

pub use common::{ParseError, ParseResult, Production};
pub use limits::{ParserLimits, DEFAULT_MAX_NESTING_DEPTH};
pub use parser::Parser;
pub use stream::TokenStream;

use crate::modl::ast::Document;
use crate::modl::token::Token;

/// Parse a token sequence with the default limits
pub fn parse(tokens: Vec<Token>) -> ParseResult<Document> {
    Parser::new(tokens).parse()
}

pub fn parse_with_limits(tokens: Vec<Token>, limits: ParserLimits) -> ParseResult<Document> {
    Parser::with_limits(tokens, limits).parse()
}
