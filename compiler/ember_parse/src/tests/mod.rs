//! Parser tests.
//!
//! - `parser`: statements, expressions and precedence
//! - `errors`: grammar violations and the spans they report
