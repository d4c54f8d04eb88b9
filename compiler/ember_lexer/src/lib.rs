//! Lexer for Ember.
//!
//! Raw scanning is done by a `logos` automaton that knows nothing about
//! keywords. Every run of letters comes out as a word and is classified
//! afterwards against the active [`Dialect`]'s keyword table. That keeps one
//! tokenizer for every spelling of the language.
//!
//! A dialect may name a switch word. When the lexer meets it, all tokens
//! produced so far are discarded and lexing restarts on the rest of the
//! source under the target dialect.

mod keywords;
mod lex_error;
mod raw_token;

use ember_ir::{Span, Token, TokenKind};
use logos::Logos;

pub use keywords::{Dialect, UnknownDialect};
pub use lex_error::{LexError, LexErrorKind};

use keywords::Word;
use raw_token::RawToken;

/// Tokenize `source` with the standard keyword table.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source, Dialect::Standard)
}

/// Tokenize `source`, starting in `dialect`.
///
/// The returned list always ends with a single [`TokenKind::Eof`].
pub fn tokenize(source: &str, dialect: Dialect) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut dialect = dialect;
    let mut offset = 0usize;

    'restart: loop {
        let mut raw = RawToken::lexer(&source[offset..]);

        while let Some(result) = raw.next() {
            let range = raw.span();
            let span = Span::from_range_saturating(offset + range.start..offset + range.end);
            let slice = raw.slice();

            let Ok(token) = result else {
                return Err(LexError::unexpected(slice, span));
            };

            let kind = match token {
                RawToken::Word => match dialect.classify(slice) {
                    Word::Keyword(kind) => kind,
                    Word::Identifier => TokenKind::Identifier,
                    Word::Switch(target) => {
                        tracing::debug!(from = ?dialect, to = ?target, at = %span, "dialect switch");
                        tokens.clear();
                        dialect = target;
                        offset += range.end;
                        continue 'restart;
                    }
                },
                RawToken::String => {
                    tokens.push(Token::new(TokenKind::String, &slice[1..slice.len() - 1], span));
                    continue;
                }
                RawToken::UnterminatedString => {
                    return Err(LexError::new(LexErrorKind::UnterminatedString, span));
                }
                other => other.kind(),
            };
            tokens.push(Token::new(kind, slice, span));
        }

        break;
    }

    let end = Span::from_range_saturating(source.len()..source.len());
    tokens.push(Token::eof(end.start));
    Ok(tokens)
}

#[cfg(test)]
mod tests;
