//! Stack growth for the recursive parts of Ember.
//!
//! The parser and the evaluator both recurse once per nesting level of the
//! source program. A script such as `((((...))))` or a long chain of nested
//! `if` bodies can exhaust the native stack long before the interpreter's own
//! call-depth limit is reached, so every recursive production runs through
//! [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended on demand with `stacker`. On
//! `wasm32` the closure is called directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first extending the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// `wasm32` manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
