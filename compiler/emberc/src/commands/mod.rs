//! Command handlers for the `ember` CLI.
//!
//! Each submodule implements one command. Handlers report their own errors
//! and return whether they succeeded; `main` turns that into an exit code.

mod debug;
mod repl;
mod run;

use ember_eval::{Interpreter, SharedPrintHandler, DEFAULT_MAX_CALL_DEPTH};
use ember_lexer::Dialect;

pub use debug::{lex_file, parse_file};
pub use repl::{Repl, ReplError};
pub use run::{run_file, run_source};

/// Settings shared by every command that lexes or evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Dialect lexing starts in.
    pub dialect: Dialect,
    pub max_call_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions { dialect: Dialect::Standard, max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

impl RunOptions {
    pub fn interpreter(&self, print_handler: SharedPrintHandler) -> Interpreter {
        Interpreter::builder()
            .print_handler(print_handler)
            .max_call_depth(self.max_call_depth)
            .build()
    }
}

/// Split `--dialect=` and `--max-depth=` out of `args`, returning the options
/// and the remaining positional arguments in order.
pub fn parse_run_options(args: &[String]) -> Result<(RunOptions, Vec<&str>), String> {
    let mut options = RunOptions::default();
    let mut rest = Vec::new();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--dialect=") {
            options.dialect = name.parse::<Dialect>().map_err(|err| err.to_string())?;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = match depth.parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => return Err(format!("invalid --max-depth value '{depth}'")),
            };
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            rest.push(arg.as_str());
        }
    }

    Ok((options, rest))
}

/// Read a file, reporting failures with a user-friendly message.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}

/// Whether diagnostics written to stderr should be colored.
pub(crate) fn stderr_color() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
