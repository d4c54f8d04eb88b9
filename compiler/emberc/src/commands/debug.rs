//! Debug commands: `lex` and `parse` for inspecting the front end.

use ember_lexer::tokenize;
use ember_parse::parse_with_dialect;

use super::{read_file, stderr_color, RunOptions};
use crate::reporting::{report_lex_error, report_parse_error};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, options: &RunOptions) -> bool {
    let Some(content) = read_file(path) else {
        return false;
    };

    match tokenize(&content, options.dialect) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for tok in &tokens {
                println!("  {:?} {:?} @ {}", tok.kind, tok.text, tok.span);
            }
            true
        }
        Err(err) => {
            let _ = report_lex_error(path, &content, &err, &mut std::io::stderr(), stderr_color());
            false
        }
    }
}

/// Parse a file and display its statements.
pub fn parse_file(path: &str, options: &RunOptions) -> bool {
    let Some(content) = read_file(path) else {
        return false;
    };

    match parse_with_dialect(&content, options.dialect) {
        Ok(program) => {
            println!("Parse result for '{path}' ({} statements):", program.body.len());
            for stmt in &program.body {
                println!("{stmt:#?}");
            }
            true
        }
        Err(err) => {
            let _ =
                report_parse_error(path, &content, &err, &mut std::io::stderr(), stderr_color());
            false
        }
    }
}
