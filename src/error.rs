//! Error types for the notemend library.
//!
//! All fallible operations return [`NotemendError`] through the crate-wide
//! [`Result`] alias. Text repair and keyword normalization never fail on string
//! input; errors come from building or loading the lexicon and from reading
//! configuration.
//!
//! # Examples
//!
//! ```
//! use notemend::error::{NotemendError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NotemendError::config("missing data directory"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for notemend operations.
#[derive(Error, Debug)]
pub enum NotemendError {
    /// I/O errors (reading word lists, writing the lexicon index, reading notes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Neither the prebuilt lexicon index nor a corpus to build it from is available.
    #[error("Lexicon unavailable: {0}")]
    LexiconUnavailable(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid arguments (an empty corpus, a blank note key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with NotemendError.
pub type Result<T> = std::result::Result<T, NotemendError>;

impl NotemendError {
    /// Create a new lexicon unavailable error.
    pub fn lexicon_unavailable<S: Into<String>>(msg: S) -> Self {
        NotemendError::LexiconUnavailable(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NotemendError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NotemendError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NotemendError::lexicon_unavailable("no words.t");
        assert_eq!(error.to_string(), "Lexicon unavailable: no words.t");

        let error = NotemendError::config("bad strategy");
        assert_eq!(error.to_string(), "Configuration error: bad strategy");

        let error = NotemendError::invalid_argument("empty corpus path");
        assert_eq!(error.to_string(), "Invalid argument: empty corpus path");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NotemendError::from(io_error);

        match error {
            NotemendError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
