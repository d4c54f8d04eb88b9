//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::{stdout_handler, SharedPrintHandler};

/// Call depth allowed unless configured otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self { print_handler: None, max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH) }
    }

    /// Destination of `print`. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of nested user-function calls before `StackOverflow`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
