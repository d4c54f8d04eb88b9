//! Call-frame tracking.
//!
//! Every user-function call pushes a [`CallFrame`]; the depth check lives in
//! [`CallStack::push`], so unbounded script recursion becomes a
//! `StackOverflow` error instead of exhausting the host.

use crate::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Name of the called function.
    pub name: String,
}

/// Live call stack of the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { frames: Vec::new(), max_depth }
    }

    /// Push a frame. On overflow the frame is not pushed.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop() called on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Snapshot, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace::new(
            self.frames.iter().rev().map(|f| BacktraceFrame { name: f.name.clone() }).collect(),
        )
    }

    /// Attach a backtrace unless the error already carries one from a deeper
    /// frame.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}
