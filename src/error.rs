//! Error types for the contraction-fix library.
//!
//! All fallible operations return [`FixerError`]. In practice only engine
//! construction can fail: once a [`ContractionFixer`](crate::fixer::ContractionFixer)
//! exists, every text operation is total.
//!
//! # Examples
//!
//! ```
//! use contraction_fix::error::{FixerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FixerError::invalid_argument("context radius must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for contraction-fix operations.
#[derive(Error, Debug)]
pub enum FixerError {
    /// A required dictionary resource is missing, unreadable or malformed.
    #[error("Failed to load dictionary '{resource}': {message}")]
    Load { resource: String, message: String },

    /// I/O errors (reading input files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FixerError.
pub type Result<T> = std::result::Result<T, FixerError>;

impl FixerError {
    /// Create a new dictionary load error for the named resource.
    pub fn load<R: Into<String>, S: Into<String>>(resource: R, msg: S) -> Self {
        FixerError::Load {
            resource: resource.into(),
            message: msg.into(),
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FixerError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FixerError::Other(msg.into())
    }

    /// Whether this error was raised while loading a dictionary.
    pub fn is_load_error(&self) -> bool {
        matches!(self, FixerError::Load { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FixerError::load("internet_slang.json", "file not found");
        assert_eq!(
            error.to_string(),
            "Failed to load dictionary 'internet_slang.json': file not found"
        );
        assert!(error.is_load_error());

        let error = FixerError::invalid_argument("bad radius");
        assert_eq!(error.to_string(), "Invalid argument: bad radius");
        assert!(!error.is_load_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fixer_error = FixerError::from(io_error);

        match fixer_error {
            FixerError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
