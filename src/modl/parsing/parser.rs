//! Recursive-descent parser for MODL
//!
//! The grammar has five productions:
//!
//! - **primitive**: a document made of exactly one scalar token. It declines (without consuming
//!   anything) when the first token is the start of a structure.
//! - **structure list**: structures separated by `;`, with an optional trailing `;`.
//! - **value**: a map, an array, a pair or a standalone primitive.
//! - **pair value**: the right-hand side of a pair. Unlike a value it may not start another
//!   pair, so `a=b=1` is rejected.
//! - **map / array**: bracketed element lists. Elements are separated by `;`, a `;` right before
//!   the closer is an error, and map elements must all be pairs.
//!
//! A key followed directly by `(` or `[` is a pair with an implicit `=`: `x(a=b)` and `x=(a=b)`
//! build the same tree.

use super::common::{ParseError, ParseResult, Production};
use super::limits::ParserLimits;
use super::stream::TokenStream;
use crate::modl::ast::{Array, AstNode, Document, Key, Map, Pair, Primitive, Structure, Value};
use crate::modl::token::{Token, TokenKind};
use log::{debug, trace};
use std::ops::Range;

pub struct Parser {
    stream: TokenStream,
    limits: ParserLimits,
    /// Maps and arrays currently open
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_limits(tokens, ParserLimits::default())
    }

    pub fn with_limits(tokens: Vec<Token>, limits: ParserLimits) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            limits,
            depth: 0,
        }
    }

    /// Parse the whole token sequence into a document
    pub fn parse(mut self) -> ParseResult<Document> {
        debug!("parsing {} tokens", self.stream.len());
        let document = match self.parse_primitive()? {
            Production::Matched(primitive) => Document::from_primitive(primitive),
            Production::NotThisProduction => {
                Document::from_structures(self.parse_structure_list()?)
            }
        };
        debug!("parsed document: {}", document.display_label());
        Ok(document)
    }

    fn parse_primitive(&mut self) -> ParseResult<Production<Primitive>> {
        let Some(token) = self.stream.next() else {
            return Ok(Production::NotThisProduction);
        };
        trace!("primitive? {}", token);

        if token.kind.is_structural() {
            if self.stream.is_empty() {
                return Err(Box::new(ParseError::UnexpectedToken { token }));
            }
            self.stream.push_back(token);
            return Ok(Production::NotThisProduction);
        }

        match self.peek_kind() {
            None => Ok(Production::Matched(primitive_from(token)?)),
            Some(TokenKind::Separator) => {
                let separator = self.expect_next()?;
                Err(Box::new(ParseError::MultipleRootPrimitives { separator }))
            }
            Some(TokenKind::Equals | TokenKind::LParen | TokenKind::LBracket) => {
                self.stream.push_back(token);
                Ok(Production::NotThisProduction)
            }
            Some(_) => Err(self.unexpected()),
        }
    }

    fn parse_structure_list(&mut self) -> ParseResult<Vec<Structure>> {
        let mut structures = Vec::new();
        while !self.stream.is_empty() {
            let span = self.peek_span();
            let structure = self
                .parse_value()?
                .into_structure()
                .ok_or(ParseError::PrimitiveAtTopLevel { span })?;
            structures.push(structure);

            match self.stream.next() {
                None => break,
                Some(token) if token.kind == TokenKind::Separator => {}
                Some(found) => return Err(Box::new(ParseError::ExpectedSeparator { found })),
            }
        }
        Ok(structures)
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        let token = self.stream.next().ok_or(ParseError::UnexpectedEnd)?;
        trace!("value: {}", token);

        match token.kind {
            TokenKind::LParen => Ok(Value::Map(self.parse_map(token)?)),
            TokenKind::LBracket => Ok(Value::Array(self.parse_array(token)?)),
            TokenKind::String | TokenKind::Quoted | TokenKind::Braced => {
                match self.peek_kind() {
                    Some(TokenKind::Equals) => {
                        self.stream.next();
                        let key = key_from(&token)?;
                        Ok(Value::Pair(Pair::new(key, self.parse_pair_value()?)))
                    }
                    Some(TokenKind::LParen | TokenKind::LBracket) => {
                        let key = key_from(&token)?;
                        Ok(Value::Pair(Pair::new(key, self.parse_pair_value()?)))
                    }
                    None
                    | Some(TokenKind::Separator | TokenKind::RParen | TokenKind::RBracket) => {
                        Ok(Value::Primitive(primitive_from(token)?))
                    }
                    Some(_) => Err(self.unexpected()),
                }
            }
            TokenKind::Integer
            | TokenKind::Float
            | TokenKind::Null
            | TokenKind::True
            | TokenKind::False => Ok(Value::Primitive(primitive_from(token)?)),
            _ => self.retry_as_primitive(token),
        }
    }

    fn parse_pair_value(&mut self) -> ParseResult<Value> {
        let token = self.stream.next().ok_or(ParseError::UnexpectedEnd)?;
        trace!("pair value: {}", token);

        match token.kind {
            TokenKind::LParen => Ok(Value::Map(self.parse_map(token)?)),
            TokenKind::LBracket => Ok(Value::Array(self.parse_array(token)?)),
            TokenKind::String | TokenKind::Quoted | TokenKind::Braced => {
                match self.peek_kind() {
                    Some(TokenKind::Equals | TokenKind::LParen | TokenKind::LBracket) => {
                        Err(Box::new(ParseError::ChainedAssignment { token }))
                    }
                    _ => Ok(Value::Primitive(primitive_from(token)?)),
                }
            }
            TokenKind::Integer
            | TokenKind::Float
            | TokenKind::Null
            | TokenKind::True
            | TokenKind::False => Ok(Value::Primitive(primitive_from(token)?)),
            _ => self.retry_as_primitive(token),
        }
    }

    /// Fallback for a token no value production starts with
    fn retry_as_primitive(&mut self, token: Token) -> ParseResult<Value> {
        self.stream.push_back(token);
        match self.parse_primitive()? {
            Production::Matched(primitive) => Ok(Value::Primitive(primitive)),
            Production::NotThisProduction => Err(self.unexpected()),
        }
    }

    fn parse_map(&mut self, opener: Token) -> ParseResult<Map> {
        let elements = self.parse_elements(&opener, TokenKind::RParen)?;
        let mut entries = Vec::with_capacity(elements.len());
        for (span, value) in elements {
            let found = value.node_type();
            let pair = value
                .into_pair()
                .ok_or(ParseError::MapEntryNotPair { found, span })?;
            entries.push(pair);
        }
        Ok(Map::new(entries))
    }

    fn parse_array(&mut self, opener: Token) -> ParseResult<Array> {
        let elements = self.parse_elements(&opener, TokenKind::RBracket)?;
        Ok(Array::new(
            elements.into_iter().map(|(_, value)| value).collect(),
        ))
    }

    /// Parse the elements of a collection up to and including its closer
    ///
    /// Each element comes with the span of its first token, for error reporting.
    fn parse_elements(
        &mut self,
        opener: &Token,
        closer: TokenKind,
    ) -> ParseResult<Vec<(Range<usize>, Value)>> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(Box::new(ParseError::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
                span: opener.span.clone(),
            }));
        }

        let mut elements = Vec::new();
        loop {
            match self.peek_kind() {
                Some(kind) if kind == closer => {
                    self.stream.next();
                    break;
                }
                Some(_) => {}
                None => return Err(unclosed(opener, closer)),
            }

            let span = self.peek_span();
            elements.push((span, self.parse_value()?));

            match self.peek_kind() {
                Some(kind) if kind == closer => {
                    self.stream.next();
                    break;
                }
                Some(TokenKind::Separator) => {
                    let separator = self.expect_next()?;
                    if self.peek_kind() == Some(closer) {
                        let closer = self.expect_next()?;
                        return Err(Box::new(ParseError::SeparatorBeforeCloser {
                            separator,
                            closer,
                        }));
                    }
                }
                // Elements that follow each other without a separator are accepted.
                Some(_) => {}
                None => return Err(unclosed(opener, closer)),
            }
        }

        self.depth -= 1;
        trace!("closed {} with {} elements", opener.text(), elements.len());
        Ok(elements)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.stream.peek().map(|token| token.kind)
    }

    fn peek_span(&self) -> Range<usize> {
        self.stream
            .peek()
            .map(|token| token.span.clone())
            .unwrap_or_default()
    }

    fn expect_next(&mut self) -> ParseResult<Token> {
        Ok(self.stream.next().ok_or(ParseError::UnexpectedEnd)?)
    }

    /// Consume the next token and report it as unexpected
    fn unexpected(&mut self) -> Box<ParseError> {
        Box::new(match self.stream.next() {
            Some(token) => ParseError::UnexpectedToken { token },
            None => ParseError::UnexpectedEnd,
        })
    }
}

fn primitive_from(token: Token) -> ParseResult<Primitive> {
    match Primitive::from_token(&token) {
        Some(primitive) => Ok(primitive),
        None => Err(Box::new(ParseError::UnexpectedToken { token })),
    }
}

fn key_from(token: &Token) -> ParseResult<Key> {
    Key::from_token(token).ok_or_else(|| {
        Box::new(ParseError::UnexpectedToken {
            token: token.clone(),
        })
    })
}

fn unclosed(opener: &Token, closer: TokenKind) -> Box<ParseError> {
    let closer = match closer {
        TokenKind::RParen => ')',
        _ => ']',
    };
    Box::new(ParseError::ExpectedCloser {
        closer,
        opener: opener.clone(),
    })
}
