//! The tree-walking interpreter.
//!
//! One exhaustive `match` per node category. Statements and expressions are
//! evaluated against an explicit [`Environment`]; `if` and `while` bodies run
//! in the current scope, only function calls open a new one.

mod builder;
mod call;
mod member;

use std::rc::Rc;

use ember_ir::{Expr, Program, Property, Stmt};
use ember_stack::ensure_sufficient_stack;
use rustc_hash::FxBuildHasher;

use crate::diagnostics::CallStack;
use crate::operators::evaluate_binary;
use crate::{
    assign_to_constant, non_boolean_condition, redeclared_variable, undeclared_variable,
    Environment, EvalError, EvalResult, Mutability, Properties, ScopeError, SharedPrintHandler,
    Value,
};

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

/// Evaluates programs. Holds no scope state of its own; the same interpreter
/// can run many programs against one persistent environment.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl Interpreter {
    /// Interpreter printing to stdout with the default call-depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of user-function calls currently active.
    #[cfg(test)]
    pub(crate) fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Evaluate every top-level statement in order against `env`.
    ///
    /// The result is the value of the last statement, or `Null` for an empty
    /// program.
    pub fn run(&mut self, program: &Program, env: &Environment) -> EvalResult {
        self.eval_block(&program.body, env)
    }

    /// Evaluate one statement.
    pub fn evaluate(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_stmt(stmt, env))
    }

    /// Evaluate one expression.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_block(&mut self, stmts: &[Stmt], env: &Environment) -> EvalResult {
        let mut last = Value::Null;
        for stmt in stmts {
            last = self.evaluate(stmt, env)?;
        }
        Ok(last)
    }

    fn eval_stmt(&mut self, stmt: &Stmt, env: &Environment) -> EvalResult {
        match stmt {
            Stmt::VariableDeclaration { constant, name, init } => {
                let value = match init {
                    Some(init) => self.eval_expr(init, env)?,
                    None => Value::Null,
                };
                let mutability =
                    if *constant { Mutability::Immutable } else { Mutability::Mutable };
                env.declare(name, value, mutability).map_err(|err| scope_error(err, name))
            }
            Stmt::FunctionDeclaration(decl) => {
                let function = Value::function(Rc::clone(decl), env.clone());
                env.declare(&decl.name, function, Mutability::Immutable)
                    .map_err(|err| scope_error(err, &decl.name))
            }
            Stmt::If { condition, then_branch, else_branch } => {
                if self.condition(condition, env)? {
                    self.eval_block(then_branch, env)
                } else if let Some(else_branch) = else_branch {
                    self.eval_block(else_branch, env)
                } else {
                    Ok(Value::Null)
                }
            }
            Stmt::While { condition, body } => {
                let mut last = Value::Null;
                while self.condition(condition, env)? {
                    last = self.eval_block(body, env)?;
                }
                Ok(last)
            }
            Stmt::Import { path } => {
                tracing::warn!(%path, "imports are not resolved; statement skipped");
                Ok(Value::Null)
            }
            Stmt::Expr(expr) => self.eval_expr(expr, env),
        }
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Identifier(name) => env.get(name).map_err(|err| scope_error(err, name)),
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::String(s) => Ok(Value::string(s.as_str())),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                evaluate_binary(*op, &left, &right)
            }
            Expr::Assignment { target, value } => self.eval_assignment(target, value, env),
            Expr::Object(properties) => self.eval_object(properties, env),
            Expr::Array(elements) => {
                let values = elements
                    .iter()
                    .map(|element| self.eval_expr(element, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(values))
            }
            Expr::Member { object, property, computed } => {
                self.eval_member(object, property, *computed, env)
            }
            Expr::Call { callee, args } => self.eval_call(callee, args, env),
        }
    }

    fn eval_object(&mut self, properties: &[Property], env: &Environment) -> EvalResult {
        let mut object = Properties::with_capacity_and_hasher(properties.len(), FxBuildHasher);
        for Property { key, value } in properties {
            let value = match value {
                Some(value) => self.eval_expr(value, env)?,
                None => env.get(key).map_err(|err| scope_error(err, key))?,
            };
            object.insert(key.clone(), value);
        }
        Ok(Value::object(object))
    }

    /// Conditions must be booleans; there is no implicit truthiness here.
    fn condition(&mut self, condition: &Expr, env: &Environment) -> Result<bool, EvalError> {
        let value = self.eval_expr(condition, env)?;
        value.as_bool().ok_or_else(|| non_boolean_condition(&value))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn scope_error(err: ScopeError, name: &str) -> EvalError {
    match err {
        ScopeError::Undeclared => undeclared_variable(name),
        ScopeError::Redeclared => redeclared_variable(name),
        ScopeError::Constant => assign_to_constant(name),
    }
}

/// Short description of an expression kind, for error messages.
fn describe(expr: &Expr) -> &'static str {
    match expr {
        Expr::Identifier(_) => "variable",
        Expr::Number(_) => "number literal",
        Expr::String(_) => "string literal",
        Expr::Binary { .. } => "binary expression",
        Expr::Assignment { .. } => "assignment",
        Expr::Object(_) => "object literal",
        Expr::Array(_) => "array literal",
        Expr::Member { .. } => "member access",
        Expr::Call { .. } => "call",
    }
}
