//! Error types for the parse pipeline

use crate::modl::lexing::TokenizeError;
use crate::modl::parsing::ParseError;
use std::fmt;
use std::ops::Range;

/// Any failure on the way from source text to a document
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Tokenize(TokenizeError),
    Parse(ParseError),
}

impl Error {
    /// Byte span of the offending source text, when known
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Error::Tokenize(err) => Some(err.span()),
            Error::Parse(err) => err.span(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Tokenize(err) => write!(f, "Tokenize error: {}", err),
            Error::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Tokenize(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::Tokenize(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<Box<ParseError>> for Error {
    fn from(err: Box<ParseError>) -> Self {
        Error::Parse(*err)
    }
}

/// Zero-based line and column (in chars) of a byte offset
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count();
    (line, column)
}

/// Format source code context around an error location
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// Lines are numbered from 1.
pub fn format_source_context(source: &str, span: &Range<usize>) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let (error_line, _) = line_column(source, span.start);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }
    context
}
