//! Expression productions, one method per precedence level.

use ember_ir::{BinaryOp, Expr, Property, TokenKind};
use ember_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser {
    /// Entry point for any expression.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// `target = value`. The value side recurses, so `a = b = 1` groups
    /// to the right.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.object()?;
        if self.cursor.eat(TokenKind::Equals) {
            let value = self.expression()?;
            return Ok(Expr::assign(target, value));
        }
        Ok(target)
    }

    /// `{ a, b: expr, }`, only when the expression starts with `{`.
    fn object(&mut self) -> Result<Expr, ParseError> {
        if !self.cursor.eat(TokenKind::LBrace) {
            return self.logical_or();
        }

        let mut properties = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) {
            let key = self.cursor.expect_ident()?;
            let value = if self.cursor.eat(TokenKind::Colon) {
                Some(self.expression()?)
            } else {
                None
            };
            properties.push(Property { key, value });

            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(Expr::Object(properties))
    }

    fn logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.logical_and()?;
        while self.cursor.eat(TokenKind::OrOr) {
            let right = self.logical_and()?;
            left = Expr::binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.comparison()?;
        while self.cursor.eat(TokenKind::AndAnd) {
            let right = self.comparison()?;
            left = Expr::binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.additive()?;
        while let Some(op) = self.match_op(|kind| match kind {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }) {
            let right = self.additive()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.multiplicative()?;
        while let Some(op) = self.match_op(|kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }) {
            let right = self.multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.postfix()?;
        while let Some(op) = self.match_op(|kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }) {
            let right = self.postfix()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Consume the current token if `classify` maps it to an operator.
    fn match_op(&mut self, classify: impl Fn(TokenKind) -> Option<BinaryOp>) -> Option<BinaryOp> {
        let op = classify(self.cursor.current_kind())?;
        self.cursor.advance();
        Some(op)
    }

    /// Member access and calls, chained left to right: `a.b[0](x)(y)`.
    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Dot => {
                    self.cursor.advance();
                    let name = self.cursor.expect_ident()?;
                    expr = Expr::member(expr, Expr::ident(name), false);
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let index = self.expression()?;
                    self.cursor.expect(TokenKind::RBracket)?;
                    expr = Expr::member(expr, index, true);
                }
                TokenKind::LParen => {
                    self.cursor.advance();
                    let args = self.list(TokenKind::RParen)?;
                    expr = Expr::call(expr, args);
                }
                _ => return Ok(expr),
            }
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Identifier => Ok(Expr::ident(self.cursor.advance().text)),
            TokenKind::Number => {
                let token = self.cursor.advance();
                match token.text.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(Expr::Number(value)),
                    _ => Err(ParseError::new(
                        ParseErrorKind::InvalidNumber { text: token.text },
                        token.span,
                    )),
                }
            }
            TokenKind::String => Ok(Expr::String(self.cursor.advance().text)),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let elements = self.list(TokenKind::RBracket)?;
                Ok(Expr::Array(elements))
            }
            _ => Err(ParseError::expected_expression(self.cursor.current())),
        }
    }

    /// Comma separated expressions up to and including `close`. A trailing
    /// comma is allowed.
    fn list(&mut self, close: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        while !self.cursor.check(close) {
            items.push(self.expression()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(close)?;
        Ok(items)
    }
}
