//! Main module for modl library functionality
//!
//! MODL text goes through two stages:
//!
//! 1. **Lexing** ([lexing]): source text to a flat vector of [Token](token::Token)s with byte
//!    spans and decoded scalar values.
//! 2. **Parsing** ([parsing]): tokens to a [Document](ast::Document), either a single primitive
//!    or a list of top-level maps, arrays and pairs.
//!
//! [parse_document] runs both. The resulting tree can be rendered through the [formats]
//! registry, and [config] holds the settings the command line tool reads.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod token;

use ast::Document;
use error::Error;
use parsing::ParserLimits;

/// Lex and parse MODL source text with the default limits
pub fn parse_document(source: &str) -> Result<Document, Error> {
    parse_document_with_limits(source, ParserLimits::default())
}

pub fn parse_document_with_limits(source: &str, limits: ParserLimits) -> Result<Document, Error> {
    let tokens = lexing::tokenize(source)?;
    Ok(parsing::parse_with_limits(tokens, limits)?)
}
