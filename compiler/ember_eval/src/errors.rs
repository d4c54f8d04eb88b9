//! Runtime errors.
//!
//! Every failure is an [`EvalError`] value propagated with `?`; nothing in the
//! evaluator exits the process. Build errors through the factory functions so
//! the message format stays in one place.

use std::fmt;

use ember_ir::BinaryOp;

use crate::Value;

pub type EvalResult = Result<Value, EvalError>;

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undeclared variable `{name}`")]
    UndeclaredVariable { name: String },

    #[error("variable `{name}` is already declared in this scope")]
    RedeclaredVariable { name: String },

    #[error("cannot assign to constant `{name}`")]
    AssignToConstant { name: String },

    #[error("condition must be a boolean, found {found}")]
    NonBooleanCondition { found: &'static str },

    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    TypeMismatch { op: BinaryOp, left: &'static str, right: &'static str },

    #[error("member access with {access} requires {expected}, found {found}")]
    InvalidMemberAccess { access: &'static str, expected: &'static str, found: &'static str },

    #[error("property `{name}` not found")]
    PropertyNotFound { name: String },

    #[error("index {index} is out of bounds for an array of length {len}")]
    IndexOutOfBounds { index: f64, len: usize },

    #[error("array index must be a number, found {found}")]
    InvalidIndex { found: &'static str },

    #[error("{found} is not callable")]
    NotCallable { found: &'static str },

    #[error("invalid assignment target: expected a variable or member, found {found}")]
    InvalidAssignmentTarget { found: &'static str },

    #[error("{function}: {message}")]
    InvalidArgument { function: &'static str, message: String },

    #[error("maximum call depth of {depth} exceeded")]
    StackOverflow { depth: usize },
}

/// One active call at the moment an error was raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
}

/// Snapshot of the call stack, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "call stack:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// A runtime error, with the calls that were active when it was raised.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, backtrace: None }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

#[cold]
pub fn undeclared_variable(name: &str) -> EvalError {
    EvalErrorKind::UndeclaredVariable { name: name.to_owned() }.into()
}

#[cold]
pub fn redeclared_variable(name: &str) -> EvalError {
    EvalErrorKind::RedeclaredVariable { name: name.to_owned() }.into()
}

#[cold]
pub fn assign_to_constant(name: &str) -> EvalError {
    EvalErrorKind::AssignToConstant { name: name.to_owned() }.into()
}

#[cold]
pub fn non_boolean_condition(found: &Value) -> EvalError {
    EvalErrorKind::NonBooleanCondition { found: found.type_name() }.into()
}

#[cold]
pub fn type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalErrorKind::TypeMismatch { op, left: left.type_name(), right: right.type_name() }.into()
}

/// `computed` selects between `[ ]` (arrays) and `.` (objects).
#[cold]
pub fn invalid_member_access(computed: bool, found: &Value) -> EvalError {
    let (access, expected) = if computed { ("`[ ]`", "an array") } else { ("`.`", "an object") };
    EvalErrorKind::InvalidMemberAccess { access, expected, found: found.type_name() }.into()
}

#[cold]
pub fn property_not_found(name: &str) -> EvalError {
    EvalErrorKind::PropertyNotFound { name: name.to_owned() }.into()
}

#[cold]
pub fn index_out_of_bounds(index: f64, len: usize) -> EvalError {
    EvalErrorKind::IndexOutOfBounds { index, len }.into()
}

#[cold]
pub fn invalid_index(found: &Value) -> EvalError {
    EvalErrorKind::InvalidIndex { found: found.type_name() }.into()
}

#[cold]
pub fn not_callable(found: &Value) -> EvalError {
    EvalErrorKind::NotCallable { found: found.type_name() }.into()
}

#[cold]
pub fn invalid_assignment_target(found: &'static str) -> EvalError {
    EvalErrorKind::InvalidAssignmentTarget { found }.into()
}

#[cold]
pub fn invalid_argument(function: &'static str, message: impl Into<String>) -> EvalError {
    EvalErrorKind::InvalidArgument { function, message: message.into() }.into()
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalErrorKind::StackOverflow { depth }.into()
}
