//! Error types and result aliases for linkwire operations.
//!
//! Provides a unified error type that covers the small set of failure
//! conditions the tool can hit, keeping the underlying OS error as the
//! source so diagnostics stay actionable.

use thiserror::Error;

/// Unified error type for all linkwire operations
#[derive(Error, Debug)]
pub enum LinkwireError {
    // Invocation errors
    #[error("expected {expected} path arguments, got {got}")]
    Usage { expected: usize, got: usize },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for linkwire operations
pub type LinkwireResult<T> = Result<T, LinkwireError>;

impl LinkwireError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            LinkwireError::Io { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                Some("Check write permissions on the build tree and try again")
            },
            LinkwireError::Io { source, .. }
                if source.kind() == std::io::ErrorKind::AlreadyExists =>
            {
                Some("An entry already exists at the link path; remove it before re-linking")
            },
            _ => None,
        }
    }
}
