//! Evaluator tests driven by parsed source.
//!
//! - `eval`: statements, expressions and the value model
//! - `closures`: captured environments and function calls
//! - `errors`: runtime error kinds and messages


use crate::{buffer_handler, global_environment, EvalResult, Interpreter};

/// Parse and run `source` in a fresh global environment.
fn run(source: &str) -> EvalResult {
    run_with_output(source).0
}

/// Like [`run`], also returning everything `print` wrote.
fn run_with_output(source: &str) -> (EvalResult, String) {
    let program = ember_parse::parse(source).unwrap_or_else(|err| panic!("{source:?}: {err}"));
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder().print_handler(handler.clone()).build();
    let result = interpreter.run(&program, &global_environment());
    (result, handler.get_output())
}
