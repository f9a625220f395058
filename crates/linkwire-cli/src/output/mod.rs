//! Terminal output formatting.
//!
//! Status lines go to stdout unstyled because the surrounding build system
//! matches on their exact wording; error reporting goes to stderr. A handler
//! can be constructed with a buffered sink so tests can assert the exact
//! lines and their order.

use linkwire_core::error::LinkwireError;
use std::cell::RefCell;

pub mod colors;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
    sink: Sink,
}

enum Sink {
    Terminal,
    Buffer {
        out: RefCell<Vec<String>>,
        err: RefCell<Vec<String>>,
    },
}

impl OutputHandler {
    /// Create a new output handler writing to the terminal
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
            sink: Sink::Terminal,
        }
    }

    /// Create a handler that captures lines instead of printing them
    pub fn buffered() -> Self {
        Self {
            colors: colors::ColorSupport::disabled(),
            sink: Sink::Buffer {
                out: RefCell::new(Vec::new()),
                err: RefCell::new(Vec::new()),
            },
        }
    }

    /// Print a status line on stdout
    pub fn info(&self, message: &str) {
        match &self.sink {
            Sink::Terminal => println!("{}", message),
            Sink::Buffer { out, .. } => out.borrow_mut().push(message.to_string()),
        }
    }

    /// Print an error message on stderr
    pub fn error(&self, message: &str) {
        let line = format!("{} {}", self.colors.red("✗"), message);
        match &self.sink {
            Sink::Terminal => eprintln!("{}", line),
            Sink::Buffer { err, .. } => err.borrow_mut().push(line),
        }
    }

    /// Print a hint on stderr, following an error
    pub fn hint(&self, message: &str) {
        match &self.sink {
            Sink::Terminal => eprintln!("{}", self.colors.dim(message)),
            Sink::Buffer { err, .. } => err.borrow_mut().push(message.to_string()),
        }
    }

    /// Report a failed run on stderr, with a suggestion when one applies
    pub fn report_failure(&self, error: &LinkwireError) {
        self.error(&error.to_string());
        if let Some(suggestion) = error.suggestion() {
            self.hint(suggestion);
        }
    }

    /// Status lines captured by a buffered handler
    pub fn captured_out(&self) -> Vec<String> {
        match &self.sink {
            Sink::Terminal => Vec::new(),
            Sink::Buffer { out, .. } => out.borrow().clone(),
        }
    }

    /// Error lines captured by a buffered handler
    pub fn captured_err(&self) -> Vec<String> {
        match &self.sink {
            Sink::Terminal => Vec::new(),
            Sink::Buffer { err, .. } => err.borrow().clone(),
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
