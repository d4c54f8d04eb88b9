//! Ember IR - shared data types for every phase of the interpreter.
//!
//! - [`Span`] byte ranges into the source text
//! - [`Token`] and [`TokenKind`] produced by the lexer
//! - The syntax tree ([`Program`], [`Stmt`], [`Expr`]) produced by the parser
//!
//! Everything here is plain data. The tree is immutable once parsed; function
//! bodies sit behind `Rc` so a function value can keep its declaration alive
//! without cloning statements.

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, FunctionDecl, Program, Property, Stmt};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
