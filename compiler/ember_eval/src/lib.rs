//! Tree-walking evaluator for Ember.
//!
//! - [`Value`]: the tagged runtime value model
//! - [`Environment`]: parent-linked lexical scopes
//! - [`Interpreter`]: walks statements and expressions against an environment
//! - [`natives`]: host functions seeded into the global scope
//!
//! Everything is single-threaded. Environments, objects and arrays are shared
//! through `Rc<RefCell<_>>`, so mutation through one alias is visible through
//! every other one, which closures rely on.

mod diagnostics;
mod environment;
mod errors;
mod interpreter;
pub mod natives;
mod operators;
mod print_handler;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Binding, Environment, Mutability, ScopeError};
pub use errors::{
    assign_to_constant, index_out_of_bounds, invalid_argument, invalid_assignment_target,
    invalid_index, invalid_member_access, non_boolean_condition, not_callable,
    property_not_found, recursion_limit_exceeded, redeclared_variable, type_mismatch,
    undeclared_variable, BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{
    format_number, FunctionValue, Heap, NativeCall, NativeFn, NativeFunction, Properties, Value,
};

/// A fresh root environment holding the native registry.
pub fn global_environment() -> Environment {
    let env = Environment::new();
    natives::install(&env);
    env
}

#[cfg(test)]
mod tests;
