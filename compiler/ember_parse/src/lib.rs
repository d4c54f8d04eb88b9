//! Recursive-descent parser for Ember.
//!
//! One token of lookahead, no backtracking. The first grammar violation
//! aborts the parse with a [`ParseError`] carrying the offending span.
//!
//! Expression precedence, loosest first:
//!
//! | level          | operators                 | assoc |
//! |----------------|---------------------------|-------|
//! | assignment     | `=`                       | right |
//! | object literal | `{ k, k: v }`             |       |
//! | logical or     | `\|\|`                    | left  |
//! | logical and    | `&&`                      | left  |
//! | comparison     | `== != < > <= >=`         | left  |
//! | additive       | `+ -`                     | left  |
//! | multiplicative | `* / %`                   | left  |
//! | postfix        | `.name` `[expr]` `(args)` | left  |
//! | primary        | literals, names, `( )`, `[ ]` |   |

mod cursor;
mod error;
mod grammar;

use ember_ir::{Program, Token};
use ember_lexer::Dialect;

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;

/// Parse `source` written in the standard dialect.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_with_dialect(source, Dialect::Standard)
}

/// Lex `source` starting in `dialect`, then parse it.
pub fn parse_with_dialect(source: &str, dialect: Dialect) -> Result<Program, ParseError> {
    let tokens = ember_lexer::tokenize(source, dialect)?;
    Parser::new(tokens).program()
}

/// Parser over an already lexed token list.
pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// The list must end with an `Eof` token, as produced by the lexer.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { cursor: Cursor::new(tokens) }
    }

    /// Parse statements until end of input.
    pub fn program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            body.push(self.statement()?);
        }
        Ok(Program { body })
    }
}

#[cfg(test)]
mod tests;
