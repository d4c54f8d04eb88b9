//! Ember command-line driver.
//!
//! ```text
//! source ──► ember_lexer::tokenize ──► ember_parse::Parser ──► ember_eval::Interpreter
//!                                                                   │
//!                                       reporting (ariadne) ◄───────┘ errors
//! ```
//!
//! The binary in `main.rs` only parses arguments and maps results to exit
//! codes; everything it calls lives here so tests can drive it with in-memory
//! input and output.

pub mod commands;
pub mod reporting;

use std::sync::Once;

pub use commands::{parse_run_options, RunOptions};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber on stderr.
///
/// Filters come from `EMBER_LOG`, falling back to `RUST_LOG`. With neither
/// set, no subscriber is installed and tracing stays disabled.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("EMBER_LOG")
            .or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
