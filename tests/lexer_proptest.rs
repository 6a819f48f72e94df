//! Property-based tests for the MODL lexer
//!
//! Token spans must cover the input exactly: in order, without overlap, with only whitespace
//! between them. Arbitrary input must never panic the lexer or the parser.

use modl::modl::lexing::tokenize;
use modl::parse_document;
use proptest::prelude::*;

/// Strings built from the characters MODL gives meaning to, plus some plain text
fn modl_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(vec![
                "(", ")", "[", "]", ";", "=", " ", "\n", "\\", "~", "\"", "`", "{", "}",
            ])
            .prop_map(str::to_string),
            "-?[0-9]{1,4}(\\.[0-9]{1,3})?",
            "[a-z]{1,6}",
            prop::sample::select(vec!["true", "false", "null"]).prop_map(str::to_string),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn check_span_cover(input: &str) -> Result<(), TestCaseError> {
    let Ok(tokens) = tokenize(input) else {
        return Ok(());
    };

    let mut rebuilt = String::new();
    let mut cursor = 0;
    for token in &tokens {
        prop_assert!(token.span.start >= cursor, "overlapping span {:?}", token.span);
        prop_assert!(token.span.start < token.span.end, "empty span {:?}", token.span);
        let gap = &input[cursor..token.span.start];
        prop_assert!(gap.chars().all(char::is_whitespace), "gap {:?}", gap);
        rebuilt.push_str(gap);
        rebuilt.push_str(token.source_text(input));
        cursor = token.span.end;
    }
    let tail = &input[cursor..];
    prop_assert!(tail.chars().all(char::is_whitespace), "tail {:?}", tail);
    rebuilt.push_str(tail);

    prop_assert_eq!(rebuilt, input);
    Ok(())
}

proptest! {
    #[test]
    fn test_spans_cover_modl_like_input(input in modl_like()) {
        check_span_cover(&input)?;
    }

    #[test]
    fn test_spans_cover_arbitrary_input(input in "\\PC{0,40}") {
        check_span_cover(&input)?;
    }

    #[test]
    fn test_parse_never_panics(input in modl_like()) {
        let _ = parse_document(&input);
    }

    #[test]
    fn test_integers_classify(n in any::<i64>()) {
        let tokens = tokenize(&n.to_string()).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].value, &modl::modl::token::TokenValue::Integer(n));
    }
}
