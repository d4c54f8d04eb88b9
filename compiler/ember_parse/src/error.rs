//! Parse errors.

use ember_ir::{Span, Token, TokenKind};
use ember_lexer::{LexError, LexErrorKind};

/// A grammar violation (or a lexing failure surfaced through [`crate::parse`]).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lex(LexErrorKind),

    #[error("expected {expected}, found {}", describe(.found, .text))]
    UnexpectedToken { expected: &'static str, found: TokenKind, text: String },

    #[error("expected an expression, found {}", describe(.found, .text))]
    ExpectedExpression { found: TokenKind, text: String },

    #[error("constant `{name}` must be initialized")]
    MissingConstInitializer { name: String },

    #[error("function parameters must be names, found {}", describe(.found, .text))]
    InvalidParameter { found: TokenKind, text: String },

    #[error("number literal `{text}` is out of range")]
    InvalidNumber { text: String },
}

fn describe(kind: &TokenKind, text: &str) -> String {
    let kind = *kind;
    match kind {
        TokenKind::Eof => kind.display_name().to_owned(),
        TokenKind::Identifier | TokenKind::Number => format!("{kind} `{text}`"),
        TokenKind::String => format!("string \"{text}\""),
        _ if kind.is_keyword() => format!("keyword `{text}`"),
        _ => kind.display_name().to_owned(),
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    #[cold]
    pub(crate) fn unexpected(expected: &'static str, found: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind,
                text: found.text.clone(),
            },
            found.span,
        )
    }

    #[cold]
    pub(crate) fn expected_expression(found: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::ExpectedExpression { found: found.kind, text: found.text.clone() },
            found.span,
        )
    }

    #[cold]
    pub(crate) fn invalid_parameter(found: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::InvalidParameter { found: found.kind, text: found.text.clone() },
            found.span,
        )
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lex(err.kind), err.span)
    }
}
