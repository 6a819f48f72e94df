//! Base tokenization implementation for the MODL lexer
//!
//! The logos lexer recognises the first character of every token and skips whitespace.
//! Quoted, braced and bare tokens are context sensitive (escapes, embedded whitespace), so their
//! variants hand over to the pure scanners in [scanning](super::scanning) through callbacks and
//! bump the lexer past the text those scanners consumed.

use super::classification::classify;
use super::common::TokenizeError;
use super::scanning::{scan_bare, scan_quoted};
use crate::modl::token::{Token, TokenKind, TokenValue};
use log::{debug, trace};
use logos::{Lexer, Logos};

/// Failure raised from inside a logos callback
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScanError {
    #[default]
    Unrecognised,
    Unclosed(char),
}

/// Raw lexemes as seen by logos, before number and keyword classification
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(error = ScanError)]
pub enum Lexeme {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Separator,
    #[token("=")]
    Equals,
    #[token("\"", |lex| close_literal(lex, b'"'))]
    #[token("`", |lex| close_literal(lex, b'`'))]
    Quoted,
    #[token("{", |lex| close_literal(lex, b'}'))]
    Braced,
    #[regex(r#"[^ \t\r\n()\[\];="`{]"#, close_bare)]
    Bare,
}

impl Lexeme {
    fn kind(self) -> TokenKind {
        match self {
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::LBracket => TokenKind::LBracket,
            Lexeme::RBracket => TokenKind::RBracket,
            Lexeme::Separator => TokenKind::Separator,
            Lexeme::Equals => TokenKind::Equals,
            Lexeme::Quoted => TokenKind::Quoted,
            Lexeme::Braced => TokenKind::Braced,
            Lexeme::Bare => TokenKind::String,
        }
    }
}

fn close_literal(lex: &mut Lexer<Lexeme>, terminator: u8) -> Result<(), ScanError> {
    let span = lex.span();
    match scan_quoted(lex.source(), span.start, terminator) {
        Some(end) => {
            lex.bump(end - span.end);
            Ok(())
        }
        None => {
            lex.bump(lex.source().len() - span.end);
            Err(ScanError::Unclosed(terminator as char))
        }
    }
}

fn close_bare(lex: &mut Lexer<Lexeme>) {
    let span = lex.span();
    let end = scan_bare(lex.source(), span.start);
    lex.bump(end - span.end);
}

/// Tokenize MODL source into a vector of tokens
///
/// Fails on the first quoted or braced literal that is never closed.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = match result {
            Ok(lexeme) => lexeme,
            Err(ScanError::Unclosed(delimiter)) => {
                return Err(TokenizeError::UnclosedQuote { delimiter, span })
            }
            Err(ScanError::Unrecognised) => {
                return Err(TokenizeError::UnexpectedCharacter { span })
            }
        };

        let raw = lexer.slice();
        let token = match lexeme {
            Lexeme::Quoted | Lexeme::Braced | Lexeme::Bare => {
                let (kind, value) = classify(lexeme.kind(), raw.trim());
                Token::new(kind, value, span)
            }
            _ => Token::new(lexeme.kind(), TokenValue::Text(raw.to_string()), span),
        };
        trace!("token {}", token);
        tokens.push(token);
    }

    debug!(
        "tokenized {} bytes into {} tokens",
        source.len(),
        tokens.len()
    );
    Ok(tokens)
}
