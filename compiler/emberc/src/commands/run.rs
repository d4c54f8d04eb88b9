//! The `run` command: parse and evaluate an Ember source file.

use std::io::Write;

use ember_eval::{global_environment, stdout_handler, SharedPrintHandler};

use super::{read_file, stderr_color, RunOptions};
use crate::reporting::{report_eval_error, report_parse_error};

/// Run a file against a fresh global environment, printing to stdout.
pub fn run_file(path: &str, options: &RunOptions) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    let mut stderr = std::io::stderr();
    run_source(path, &source, options, stdout_handler(), &mut stderr, stderr_color())
}

/// Parse and evaluate `source` once. Errors are rendered to `errors`; the
/// return value says whether evaluation completed.
pub fn run_source(
    name: &str,
    source: &str,
    options: &RunOptions,
    print_handler: SharedPrintHandler,
    errors: &mut dyn Write,
    use_color: bool,
) -> bool {
    let program = match ember_parse::parse_with_dialect(source, options.dialect) {
        Ok(program) => program,
        Err(err) => {
            let _ = report_parse_error(name, source, &err, errors, use_color);
            return false;
        }
    };
    tracing::debug!(statements = program.body.len(), "parsed {name}");

    let mut interpreter = options.interpreter(print_handler);
    match interpreter.run(&program, &global_environment()) {
        Ok(_) => true,
        Err(err) => {
            let _ = report_eval_error(&err, errors);
            false
        }
    }
}
