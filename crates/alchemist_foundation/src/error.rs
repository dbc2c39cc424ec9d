//! Error types for the Alchemist system.
//!
//! Uses `thiserror` for ergonomic error definition. Note that domain
//! outcomes ("Not enough ingredients", "No formula for X", ...) are not
//! errors: they are ordinary replies. This type covers infrastructure
//! failures only - the terminal, capacity limits, and internal bugs.

use thiserror::Error;

/// The result type used throughout Alchemist.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Alchemist operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn readline(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Readline(message.into()))
    }

    /// Creates a capacity exceeded error.
    #[must_use]
    pub fn capacity_exceeded(what: &'static str, limit: usize) -> Self {
        Self::new(ErrorKind::CapacityExceeded { what, limit })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The line editor failed to read from the terminal.
    #[error("line editor: {0}")]
    Readline(String),

    /// A configured capacity would be exceeded.
    ///
    /// The original fixed-size stores dropped additions past their limits
    /// silently; this kind surfaces the one limit that survives (formula
    /// components) explicitly.
    #[error("capacity exceeded: at most {limit} {what}")]
    CapacityExceeded {
        /// What was being stored.
        what: &'static str,
        /// The configured limit.
        limit: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
