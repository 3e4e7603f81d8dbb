//! Error types for whole-run failures.
//!
//! Uses `thiserror` for ergonomic error definition. Per-declaration
//! failures are diagnostics reported through a [`crate::Reporter`], not
//! errors; `Error` covers the outcomes that end a compilation run.

use thiserror::Error;

/// Result alias for Herald operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Herald operations.
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

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Creates a compilation-failed error.
    #[must_use]
    pub fn compilation_failed(errors: usize) -> Self {
        Self::new(ErrorKind::CompilationFailed { errors })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The run reported error diagnostics; the Environment is not usable
    /// for code generation.
    #[error("compilation failed with {errors} error(s)")]
    CompilationFailed {
        /// How many diagnostics were reported.
        errors: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
