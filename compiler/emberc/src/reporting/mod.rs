//! Rendering errors for humans.
//!
//! Lex and parse errors carry a span, so they are drawn as annotated source
//! snippets. Runtime errors have no source position; they print as a single
//! line followed by the call stack when one was captured.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use ember_eval::EvalError;
use ember_lexer::LexError;
use ember_parse::{ParseError, ParseErrorKind};

/// Draw `error` against `source`. `name` is the file name shown in the
/// snippet header.
pub fn report_parse_error(
    name: &str,
    source: &str,
    error: &ParseError,
    writer: &mut dyn Write,
    use_color: bool,
) -> io::Result<()> {
    let range = clamp(error.span.to_range(), source.len());
    let message = error.to_string();
    let phase = if matches!(error.kind, ParseErrorKind::Lex(_)) { "lex" } else { "syntax" };

    Report::build(ReportKind::Error, (name, range.clone()))
        .with_message(format!("{phase} error: {message}"))
        .with_config(Config::default().with_color(use_color).with_index_type(IndexType::Byte))
        .with_label(Label::new((name, range)).with_message(label(&error.kind)).with_color(Color::Red))
        .finish()
        .write((name, Source::from(source)), &mut *writer)
}

/// Same as [`report_parse_error`], for errors from a bare `lex`.
pub fn report_lex_error(
    name: &str,
    source: &str,
    error: &LexError,
    writer: &mut dyn Write,
    use_color: bool,
) -> io::Result<()> {
    report_parse_error(name, source, &ParseError::from(error.clone()), writer, use_color)
}

pub fn report_eval_error(error: &EvalError, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "runtime error: {error}")?;
    if let Some(backtrace) = &error.backtrace {
        write!(writer, "{backtrace}")?;
    }
    Ok(())
}

/// Short text placed under the offending span.
fn label(kind: &ParseErrorKind) -> &'static str {
    match kind {
        ParseErrorKind::Lex(_) => "not valid here",
        ParseErrorKind::UnexpectedToken { .. } => "unexpected token",
        ParseErrorKind::ExpectedExpression { .. } => "expected an expression here",
        ParseErrorKind::MissingConstInitializer { .. } => "needs `= value`",
        ParseErrorKind::InvalidParameter { .. } => "not a parameter name",
        ParseErrorKind::InvalidNumber { .. } => "number too large",
    }
}

/// Keep the range inside the source so end-of-input errors still render.
fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    start..range.end.clamp(start, len)
}
