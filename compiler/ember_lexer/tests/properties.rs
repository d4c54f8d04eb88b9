//! Property tests for the lexer.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ember_ir::TokenKind;
use ember_lexer::{tokenize, Dialect};
use proptest::prelude::*;

proptest! {
    /// The lexer is total: any input either tokenizes or reports an error,
    /// and successful output ends with exactly one end-of-input token.
    #[test]
    fn ends_with_single_eof(source in "\\PC{0,64}") {
        if let Ok(tokens) = tokenize(&source, Dialect::Standard) {
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        }
    }

    /// Spans are ordered, non-overlapping and inside the source.
    #[test]
    fn spans_are_ordered(source in "[a-z0-9 (){}\\[\\],:.;+*/%<>=-]{0,64}") {
        let tokens = tokenize(&source, Dialect::Standard).unwrap();
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end as usize <= source.len());
            last_end = token.span.end;
        }
    }

    /// Identifiers that are not keywords keep their exact spelling.
    #[test]
    fn identifiers_round_trip(word in "[a-zA-Z]{1,12}") {
        let tokens = tokenize(&word, Dialect::Prose).unwrap();
        let is_reserved = Dialect::Prose
            .keywords()
            .iter()
            .any(|(k, _)| word.eq_ignore_ascii_case(k))
            || word.eq_ignore_ascii_case(Dialect::Prose.switch().0);
        if !is_reserved {
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
            prop_assert_eq!(&tokens[0].text, &word);
        }
    }
}
