use ember_ir::Span;

/// A lexing failure and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// Error for the first character of a slice `logos` could not match.
    #[cold]
    pub(crate) fn unexpected(slice: &str, span: Span) -> Self {
        let ch = slice.chars().next().unwrap_or('\0');
        let width = u32::try_from(ch.len_utf8()).unwrap_or(1);
        LexError::new(
            LexErrorKind::UnexpectedChar(ch),
            Span::new(span.start, span.start.saturating_add(width)),
        )
    }
}
