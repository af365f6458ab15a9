//! Error types for container operations.
//!
//! Path resolution misses are never errors in this crate; they surface as
//! `Option` or through caller-supplied defaults. The variants here cover the
//! hard failures: required keys that must exist, mismatched pairings, and
//! serialization problems.

use thiserror::Error;

/// Structured error types for container operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A required key or path was not present.
    #[error("key not found: {path}")]
    KeyNotFound { path: String },

    /// Key and value sequences of different lengths were paired.
    #[error("length mismatch: {keys} keys vs {values} values")]
    LengthMismatch { keys: usize, values: usize },

    /// More random samples were requested than elements exist.
    #[error("sample size {requested} exceeds population {available}")]
    SampleTooLarge { requested: usize, available: usize },

    /// A value had a different type than the operation requires.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error indicates a missing key or path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound { path } => Some(path),
            _ => None,
        }
    }
}
