//! Error types for the Lexis library.
//!
//! All errors are represented by the [`LexisError`] enum. Stream lifecycle
//! violations (`NotReset`, `StreamClosed`) are caller bugs and are always
//! surfaced; no stage in a filter chain swallows or retries an error.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::invalid_input("unterminated multi-byte sequence"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// A token was pulled before the stream was reset.
    #[error("Token stream was not reset before pulling")]
    NotReset,

    /// An operation was attempted on a closed stream.
    #[error("Token stream is closed")]
    StreamClosed,

    /// Malformed input text (e.g. invalid UTF-8).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidInput(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexisError::Config(msg.into())
    }

    /// Whether this error reports a misuse of the stream lifecycle.
    pub fn is_lifecycle_error(&self) -> bool {
        matches!(self, LexisError::NotReset | LexisError::StreamClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexisError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = LexisError::invalid_input("truncated");
        assert_eq!(error.to_string(), "Invalid input: truncated");

        let error = LexisError::config("unknown preset");
        assert_eq!(error.to_string(), "Configuration error: unknown preset");
    }

    #[test]
    fn test_lifecycle_errors() {
        assert!(LexisError::NotReset.is_lifecycle_error());
        assert!(LexisError::StreamClosed.is_lifecycle_error());
        assert!(!LexisError::config("x").is_lifecycle_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexis_error = LexisError::from(io_error);

        match lexis_error {
            LexisError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
