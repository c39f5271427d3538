//! Error types for DevUtils core operations.
//!
//! Converters are tolerant by design: a rejected edit is reported as an
//! outcome, not an error. The variants here are reserved for direct engine
//! calls made with arguments the caller should have validated. The CLI layer
//! maps these to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for DevUtils operations.
pub type Result<T> = std::result::Result<T, DevUtilsError>;

/// Core error type for DevUtils operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DevUtilsError {
    /// Argument outside its permitted domain (e.g. radix not in 2..=36)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text that does not parse under the requested base or format
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input that parsed but does not denote a usable value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<chrono::ParseError> for DevUtilsError {
    fn from(err: chrono::ParseError) -> Self {
        DevUtilsError::Parse(err.to_string())
    }
}
