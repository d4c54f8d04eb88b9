//! Syntax tree.
//!
//! Closed sum types: every consumer matches exhaustively, so adding a node
//! kind is a compile error everywhere it has to be handled.

mod operators;

use std::rc::Rc;

pub use operators::BinaryOp;

/// A parsed source file or REPL line.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `let name = init` or `const name = init`.
    ///
    /// `init` is `None` only for `let name` without initializer; the parser
    /// rejects a constant without one.
    VariableDeclaration { constant: bool, name: String, init: Option<Expr> },

    /// `fn name(params) { body }`.
    FunctionDeclaration(Rc<FunctionDecl>),

    If { condition: Expr, then_branch: Vec<Stmt>, else_branch: Option<Vec<Stmt>> },

    While { condition: Expr, body: Vec<Stmt> },

    /// `import "path"`. Parsed and kept in the tree; never resolved.
    Import { path: String },

    Expr(Expr),
}

/// Shared function declaration, referenced by every function value created
/// from it.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Rc<[Stmt]>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Identifier(String),
    Number(f64),
    String(String),
    Binary { op: BinaryOp, left: Box<Expr>, right: Box<Expr> },
    /// `target = value`, right associative.
    Assignment { target: Box<Expr>, value: Box<Expr> },
    Object(Vec<Property>),
    Array(Vec<Expr>),
    /// `object.property` when `computed` is false, `object[property]` when true.
    Member { object: Box<Expr>, property: Box<Expr>, computed: bool },
    Call { callee: Box<Expr>, args: Vec<Expr> },
}

/// An object literal entry. `value` is `None` for the `{ key }` shorthand,
/// which reads the variable named `key`.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Option<Expr>,
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary { op, left: Box::new(left), right: Box::new(right) }
    }

    pub fn member(object: Expr, property: Expr, computed: bool) -> Self {
        Expr::Member { object: Box::new(object), property: Box::new(property), computed }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call { callee: Box::new(callee), args }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assignment { target: Box::new(target), value: Box::new(value) }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }
}
