//! Where `print` output goes.
//!
//! The interpreter owns a [`SharedPrintHandler`]. The CLI uses stdout; tests
//! use a buffer and assert on what was printed. Dispatch is an enum rather
//! than a trait object.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes lines to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }
}

/// Collects printed lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            PrintHandlerImpl::Stdout(h) => h.println(msg),
            PrintHandlerImpl::Buffer(h) => h.println(msg),
            PrintHandlerImpl::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            PrintHandlerImpl::Buffer(h) => h.get_output(),
            PrintHandlerImpl::Stdout(_) | PrintHandlerImpl::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let PrintHandlerImpl::Buffer(h) = self {
            h.clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_lines() {
        let handler = buffer_handler();
        handler.println("one");
        handler.println("two");
        assert_eq!(handler.get_output(), "one\ntwo\n");

        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn test_silent_and_stdout_capture_nothing() {
        let silent = silent_handler();
        silent.println("dropped");
        assert_eq!(silent.get_output(), "");
        assert_eq!(stdout_handler().get_output(), "");
    }
}
