//! Error types for the casebook crate.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::value::Kind;

/// Convenience alias for results with the casebook error type.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for casebook operations.
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

    /// Creates a kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::KindMismatch { expected, actual })
    }

    /// Creates an unknown color error.
    #[must_use]
    pub fn unknown_color(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownColor(name.into()))
    }

    /// Creates a key not found error.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyNotFound(key.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value had a different kind than the caller required.
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// The expected kind.
        expected: Kind,
        /// The actual kind encountered.
        actual: Kind,
    },

    /// A color name did not name any [`crate::Color`] variant.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// A mapping lookup found no entry for the key.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}
