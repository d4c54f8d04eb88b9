//! Statement productions.

use std::rc::Rc;

use ember_ir::{FunctionDecl, Stmt, TokenKind};
use ember_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// Parse one statement and an optional trailing `;`.
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        let stmt = ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Let | TokenKind::Const => self.variable_declaration(),
            TokenKind::Fn => self.function_declaration(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Import => self.import_statement(),
            _ => self.expression().map(Stmt::Expr),
        })?;
        self.cursor.eat(TokenKind::Semicolon);
        Ok(stmt)
    }

    /// `let name [= init]` or `const name = init`.
    fn variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let constant = keyword.kind == TokenKind::Const;
        let name_token = self.cursor.expect(TokenKind::Identifier)?;
        let name = name_token.text;

        let init = if self.cursor.eat(TokenKind::Equals) {
            Some(self.expression()?)
        } else if constant {
            return Err(ParseError::new(
                ParseErrorKind::MissingConstInitializer { name },
                keyword.span.merge(name_token.span),
            ));
        } else {
            None
        };

        Ok(Stmt::VariableDeclaration { constant, name, init })
    }

    /// `fn name(a, b) { body }`.
    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let name = self.cursor.expect_ident()?;

        self.cursor.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            if !self.cursor.check(TokenKind::Identifier) {
                return Err(ParseError::invalid_parameter(self.cursor.current()));
            }
            params.push(self.cursor.advance().text);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        let body = self.block()?;
        Ok(Stmt::FunctionDeclaration(Rc::new(FunctionDecl { name, params, body: body.into() })))
    }

    /// `if cond body [else body]`. `else if` falls out of the single
    /// statement body form.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let condition = self.expression()?;
        let then_branch = self.body()?;
        let else_branch =
            if self.cursor.eat(TokenKind::Else) { Some(self.body()?) } else { None };
        Ok(Stmt::If { condition, then_branch, else_branch })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let condition = self.expression()?;
        let body = self.body()?;
        Ok(Stmt::While { condition, body })
    }

    /// `import "path"`.
    fn import_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let path = self.cursor.expect(TokenKind::String)?.text;
        Ok(Stmt::Import { path })
    }

    /// A brace block, or a single statement.
    fn body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        if self.cursor.check(TokenKind::LBrace) {
            self.block()
        } else {
            Ok(vec![self.statement()?])
        }
    }

    /// `{ stmt* }`.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            stmts.push(self.statement()?);
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(stmts)
    }
}
