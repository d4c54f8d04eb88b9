//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use ember_eval::{
    global_environment, Environment, EvalError, Interpreter, SharedPrintHandler, Value,
};
use ember_lexer::Dialect;
use ember_parse::ParseError;

use super::RunOptions;
use crate::reporting::{report_eval_error, report_parse_error};

const PROMPT: &str = ">> ";
const SOURCE_NAME: &str = "<repl>";

/// Why a single line failed. The session continues either way.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// A session: one interpreter and one global environment shared by every
/// line, so declarations persist.
pub struct Repl {
    interpreter: Interpreter,
    env: Environment,
    dialect: Dialect,
}

impl Repl {
    pub fn new(options: &RunOptions, print_handler: SharedPrintHandler) -> Self {
        Repl {
            interpreter: options.interpreter(print_handler),
            env: global_environment(),
            dialect: options.dialect,
        }
    }

    /// Parse and evaluate one line. Each line starts lexing in the session's
    /// dialect.
    pub fn eval_line(&mut self, line: &str) -> Result<Value, ReplError> {
        let program = ember_parse::parse_with_dialect(line, self.dialect)?;
        Ok(self.interpreter.run(&program, &self.env)?)
    }

    /// Prompt on `output` and evaluate lines from `input` until `exit` or end
    /// of input. Non-null results and errors go to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "Welcome to the REPL! Type 'exit' to quit.")?;
        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                writeln!(output)?;
                break;
            };
            let line = line.trim();
            if line == "exit" {
                break;
            }
            if line.is_empty() {
                continue;
            }

            match self.eval_line(line) {
                Ok(Value::Null) => {}
                Ok(value) => writeln!(output, "{value}")?,
                Err(ReplError::Parse(err)) => {
                    report_parse_error(SOURCE_NAME, line, &err, &mut *output, false)?;
                }
                Err(ReplError::Eval(err)) => report_eval_error(&err, &mut *output)?,
            }
        }
        writeln!(output, "Goodbye!")
    }
}
