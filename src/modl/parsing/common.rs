//! Common parser module
//!
//! Parse errors and the result type shared by the grammar productions.

use crate::modl::token::Token;
use std::fmt;
use std::ops::Range;

/// Errors that can occur while building a document from tokens
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token that no production accepts at this position
    UnexpectedToken { token: Token },
    /// The input ended where a value was required
    UnexpectedEnd,
    /// A root primitive followed by `;`
    MultipleRootPrimitives { separator: Token },
    /// Two top-level structures without a `;` between them
    ExpectedSeparator { found: Token },
    /// A map or array that is never closed
    ExpectedCloser { closer: char, opener: Token },
    /// A `;` directly before the closing bracket of a collection
    SeparatorBeforeCloser { separator: Token, closer: Token },
    /// A pair value that tries to introduce another key, as in `a=b=1`
    ChainedAssignment { token: Token },
    /// A map element that is not a pair
    MapEntryNotPair {
        found: &'static str,
        span: Range<usize>,
    },
    /// A primitive among the top-level structures
    PrimitiveAtTopLevel { span: Range<usize> },
    /// Maps and arrays nested beyond the configured limit
    NestingTooDeep { limit: usize, span: Range<usize> },
}

impl ParseError {
    /// The source span of the offending token, when one exists
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            ParseError::UnexpectedToken { token } => Some(token.span.clone()),
            ParseError::UnexpectedEnd => None,
            ParseError::MultipleRootPrimitives { separator } => Some(separator.span.clone()),
            ParseError::ExpectedSeparator { found } => Some(found.span.clone()),
            ParseError::ExpectedCloser { opener, .. } => Some(opener.span.clone()),
            ParseError::SeparatorBeforeCloser { separator, .. } => Some(separator.span.clone()),
            ParseError::ChainedAssignment { token } => Some(token.span.clone()),
            ParseError::MapEntryNotPair { span, .. } => Some(span.clone()),
            ParseError::PrimitiveAtTopLevel { span } => Some(span.clone()),
            ParseError::NestingTooDeep { span, .. } => Some(span.clone()),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { token } => write!(f, "Unexpected token: {}", token),
            ParseError::UnexpectedEnd => write!(f, "Unexpected end of input"),
            ParseError::MultipleRootPrimitives { separator } => write!(
                f,
                "Only one primitive is allowed at the root, found ';' at {}",
                separator.span.start
            ),
            ParseError::ExpectedSeparator { found } => {
                write!(f, "Expected ';' but found {}", found)
            }
            ParseError::ExpectedCloser { closer, opener } => write!(
                f,
                "Expected '{}' to close '{}' opened at {}",
                closer,
                opener.text(),
                opener.span.start
            ),
            ParseError::SeparatorBeforeCloser { separator, closer } => write!(
                f,
                "Unexpected ';' before '{}' at {}",
                closer.text(),
                separator.span.start
            ),
            ParseError::ChainedAssignment { token } => {
                write!(f, "Unexpected token: '{}'", token)
            }
            ParseError::MapEntryNotPair { found, span } => write!(
                f,
                "Map entries must be pairs, found {} at {}",
                found, span.start
            ),
            ParseError::PrimitiveAtTopLevel { span } => write!(
                f,
                "Expected a map, array or pair at {}, found a primitive",
                span.start
            ),
            ParseError::NestingTooDeep { limit, span } => write!(
                f,
                "Nesting deeper than {} levels at {}",
                limit, span.start
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type for parser productions, with the error boxed to keep recursive frames small
pub type ParseResult<T> = Result<T, Box<ParseError>>;

/// Outcome of a production that may decline its input without failing
///
/// Declining leaves the cursor where it was, so the caller can try another production.
#[derive(Debug, Clone, PartialEq)]
pub enum Production<T> {
    Matched(T),
    NotThisProduction,
}
