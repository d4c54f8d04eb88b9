#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    lex(source).unwrap().into_iter().map(|t| t.text).collect()
}

#[test]
fn test_empty_source() {
    let tokens = lex("").unwrap();
    assert_eq!(tokens, vec![Token::eof(0)]);

    let tokens = lex("  \n\t ").unwrap();
    assert_eq!(tokens, vec![Token::eof(5)]);
}

#[test]
fn test_declaration() {
    assert_eq!(
        kinds("let x = 42;"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(texts("let x = 42;"), vec!["let", "x", "=", "42", ";", ""]);
}

#[test]
fn test_spans() {
    let tokens = lex("fn add(a)").unwrap();
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 2),
            Span::new(3, 6),
            Span::new(6, 7),
            Span::new(7, 8),
            Span::new(8, 9),
            Span::point(9),
        ]
    );
}

#[test]
fn test_multi_char_operators() {
    assert_eq!(
        kinds("a == b != c <= d >= e && f || g < h > i"),
        vec![
            TokenKind::Identifier,
            TokenKind::EqEq,
            TokenKind::Identifier,
            TokenKind::NotEq,
            TokenKind::Identifier,
            TokenKind::LtEq,
            TokenKind::Identifier,
            TokenKind::GtEq,
            TokenKind::Identifier,
            TokenKind::AndAnd,
            TokenKind::Identifier,
            TokenKind::OrOr,
            TokenKind::Identifier,
            TokenKind::Lt,
            TokenKind::Identifier,
            TokenKind::Gt,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , : . ; + - * / %"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_literal_strips_quotes() {
    let tokens = lex(r#"print("hello world")"#).unwrap();
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].text, "hello world");
    assert_eq!(tokens[2].span, Span::new(6, 19));
}

#[test]
fn test_string_has_no_escapes() {
    let tokens = lex(r#""a\n""#).unwrap();
    assert_eq!(tokens[0].text, r"a\n");
}

#[test]
fn test_unterminated_string() {
    let err = lex(r#"let s = "oops"#).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(8, 13));
}

#[test]
fn test_unexpected_character() {
    let err = lex("let x = 1 # 2").unwrap_err();
    assert_eq!(err, LexError::new(LexErrorKind::UnexpectedChar('#'), Span::new(10, 11)));
    assert_eq!(err.to_string(), "unexpected character `#`");

    let err = lex("a & b").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('&'));

    let err = lex("x_1").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('_'));
}

#[test]
fn test_keywords_case_insensitive_keep_text() {
    let tokens = lex("CONST Pi = 3").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Const);
    assert_eq!(tokens[0].text, "CONST");
}

#[test]
fn test_numbers_are_digit_runs() {
    assert_eq!(
        kinds("3.14"),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_prose_dialect() {
    let tokens = tokenize("set x = 1 when x during y otherwise fix define use", Dialect::Prose)
        .unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::If,
            TokenKind::Identifier,
            TokenKind::While,
            TokenKind::Identifier,
            TokenKind::Else,
            TokenKind::Const,
            TokenKind::Fn,
            TokenKind::Import,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_switch_discards_earlier_tokens() {
    let tokens = lex("let a = 1 prose set b = 2").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
    // Spans stay relative to the whole source after a restart.
    assert_eq!(tokens[0].span, Span::new(16, 19));
    assert_eq!(tokens[1].text, "b");
    assert_eq!(tokens[4].span, Span::point(25));
}

#[test]
fn test_switch_back_and_forth() {
    let tokens = lex("prose set a = 1 standard let b").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[0].text, "let");
    assert_eq!(tokens[1].text, "b");
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_error_after_switch_reports_absolute_span() {
    let err = lex("prose set x = $").unwrap_err();
    assert_eq!(err.span, Span::new(14, 15));
}
