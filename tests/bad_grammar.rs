//! Inputs that must be rejected
//!
//! Every case fails with an error and never yields a document. The variant checks pin down
//! which stage and rule rejects each input.

use modl::modl::lexing::TokenizeError;
use modl::modl::parsing::ParseError;
use modl::modl::token::TokenKind;
use modl::{parse_document, Error};
use rstest::rstest;

#[rstest]
#[case(";")]
#[case("[")]
#[case("]")]
#[case("(")]
#[case(")")]
#[case("=")]
#[case("[[]")]
#[case("[]]")]
#[case("(()")]
#[case("())")]
#[case("[;]")]
#[case("(;)")]
#[case("()()")]
#[case("[][]")]
#[case("(a=b;)")]
#[case("[a=b;]")]
#[case("a;b")]
#[case("[];;")]
#[case("();;")]
#[case("a=b=1")]
#[case("a=")]
#[case("a=b c=d")]
#[case("(a)")]
#[case("a=b;1")]
#[case("a=b;;c=d")]
#[case("(a=b;;c=d)")]
#[case("{hello} world")]
fn test_rejected(#[case] source: &str) {
    assert!(
        parse_document(source).is_err(),
        "{:?} should not parse",
        source
    );
}

fn parse_error(source: &str) -> ParseError {
    match parse_document(source) {
        Err(Error::Parse(err)) => err,
        other => panic!("{:?} should fail to parse, got {:?}", source, other),
    }
}

#[rstest]
#[case(";", TokenKind::Separator)]
#[case("]", TokenKind::RBracket)]
#[case("=", TokenKind::Equals)]
#[case("[;]", TokenKind::Separator)]
#[case("(;)", TokenKind::Separator)]
fn test_unexpected_structural_token(#[case] source: &str, #[case] kind: TokenKind) {
    match parse_error(source) {
        ParseError::UnexpectedToken { token } => assert_eq!(token.kind, kind),
        other => panic!("unexpected error {:?}", other),
    }
}

#[rstest]
#[case("[[]", ']')]
#[case("(()", ')')]
#[case("a=(b=1", ')')]
#[case("[1;", ']')]
fn test_missing_closer(#[case] source: &str, #[case] expected: char) {
    match parse_error(source) {
        ParseError::ExpectedCloser { closer, .. } => assert_eq!(closer, expected),
        other => panic!("unexpected error {:?}", other),
    }
}

#[rstest]
#[case("[]]")]
#[case("())")]
#[case("()()")]
#[case("[][]")]
fn test_missing_top_level_separator(#[case] source: &str) {
    assert!(matches!(
        parse_error(source),
        ParseError::ExpectedSeparator { .. }
    ));
}

#[rstest]
#[case("(a=b;)", ")")]
#[case("[a=b;]", "]")]
fn test_separator_before_closer(#[case] source: &str, #[case] closer_text: &str) {
    match parse_error(source) {
        ParseError::SeparatorBeforeCloser { separator, closer } => {
            assert_eq!(separator.span, 4..5);
            assert_eq!(closer.text(), closer_text);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_chained_assignment() {
    let err = parse_error("a=b=1");
    match &err {
        ParseError::ChainedAssignment { token } => {
            assert_eq!(token.text(), "b");
            assert_eq!(token.span, 2..3);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.span(), Some(2..3));
    assert_eq!(
        err.to_string(),
        "Unexpected token: 'type: STRING, from: 2, to: 3, value: \"b\"'"
    );
}

#[rstest]
#[case("[];;")]
#[case("();;")]
fn test_doubled_top_level_separator(#[case] source: &str) {
    match parse_error(source) {
        ParseError::UnexpectedToken { token } => {
            assert_eq!(token.kind, TokenKind::Separator);
            assert_eq!(token.span, 3..4);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[rstest]
#[case("a=b(c=d)")]
#[case("a=b[1]")]
fn test_pair_value_cannot_start_implicit_pair(#[case] source: &str) {
    assert!(matches!(
        parse_error(source),
        ParseError::ChainedAssignment { .. }
    ));
}

#[test]
fn test_multiple_root_primitives() {
    match parse_error("a;b") {
        ParseError::MultipleRootPrimitives { separator } => assert_eq!(separator.span, 1..2),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(
        parse_error("1;").to_string(),
        "Only one primitive is allowed at the root, found ';' at 1"
    );
}

#[test]
fn test_trailing_garbage_after_root_primitive() {
    let err = parse_error("{hello} world");
    assert_eq!(
        err.to_string(),
        "Unexpected token: type: STRING, from: 8, to: 13, value: \"world\""
    );
}

#[test]
fn test_primitive_among_structures() {
    assert_eq!(
        parse_error("a=b;1"),
        ParseError::PrimitiveAtTopLevel { span: 4..5 }
    );
}

#[test]
fn test_map_entry_must_be_pair() {
    assert_eq!(
        parse_error("(a)"),
        ParseError::MapEntryNotPair {
            found: "PlainString",
            span: 1..2
        }
    );
}

#[test]
fn test_missing_pair_value() {
    assert_eq!(parse_error("a="), ParseError::UnexpectedEnd);
}

#[rstest]
#[case("{hello", '}', 0..6)]
#[case("\"abc", '"', 0..4)]
#[case("a=`x", '`', 2..4)]
fn test_unclosed_literal(
    #[case] source: &str,
    #[case] delimiter: char,
    #[case] span: std::ops::Range<usize>,
) {
    match parse_document(source) {
        Err(Error::Tokenize(TokenizeError::UnclosedQuote {
            delimiter: found,
            span: found_span,
        })) => {
            assert_eq!(found, delimiter);
            assert_eq!(found_span, span);
        }
        other => panic!("{:?} should fail to tokenize, got {:?}", source, other),
    }
}

#[test]
fn test_unclosed_brace_message() {
    let err = parse_document("{hello").unwrap_err();
    assert_eq!(err.to_string(), "Tokenize error: Unclosed quote: } near 0:6");
}
