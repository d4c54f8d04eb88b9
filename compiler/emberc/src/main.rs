//! Ember CLI

use emberc::commands::{lex_file, parse_file, run_file, Repl};
use emberc::{init_tracing, parse_run_options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, positional) = match parse_run_options(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let ok = match positional.as_slice() {
        [] | ["repl"] => {
            let mut repl = Repl::new(&options, ember_eval::stdout_handler());
            let stdin = std::io::stdin();
            match repl.run(stdin.lock(), &mut std::io::stdout()) {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("error: {e}");
                    false
                }
            }
        }
        ["run", path] => run_file(path, &options),
        ["lex", path] => lex_file(path, &options),
        ["parse", path] => parse_file(path, &options),
        ["run" | "lex" | "parse"] => {
            eprintln!("Usage: ember {} <file> [options]", positional[0]);
            false
        }
        ["help" | "-h"] => {
            print_usage();
            true
        }
        ["version" | "-V"] => {
            println!("Ember {}", env!("CARGO_PKG_VERSION"));
            true
        }
        [path] if !path.starts_with('-') => run_file(path, &options),
        _ => {
            eprintln!("Unknown command: {}", positional.join(" "));
            eprintln!();
            print_usage();
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Ember interpreter");
    println!();
    println!("Usage: ember [command] [options]");
    println!();
    println!("Commands:");
    println!("  <file>               Run an Ember program");
    println!("  run <file>           Run an Ember program");
    println!("  repl                 Start an interactive session (default)");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  parse <file>         Parse and display the syntax tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --dialect=<name>     Starting keyword dialect: standard (default), prose");
    println!("  --max-depth=<n>      Maximum function call depth (default: 1000)");
    println!();
    println!("Environment:");
    println!("  EMBER_LOG            Tracing filter, e.g. EMBER_LOG=ember_eval=debug");
    println!();
    println!("Examples:");
    println!("  ember main.em");
    println!("  ember run main.em --max-depth=200");
    println!("  ember --dialect=prose");
}
