//! Error types for the Lexis library.
//!
//! All fallible operations return [`Result`], with failures represented by
//! the [`LexisError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::analysis("invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("success"),
//!     Err(e) => eprintln!("error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (reading lexicon or model files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon-related errors (loading or parsing sense data).
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Model-related errors (summarization backend).
    #[error("Model error: {0}")]
    Model(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`LexisError`].
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        LexisError::Lexicon(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        LexisError::Model(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexisError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexisError::analysis("test analysis error");
        assert_eq!(error.to_string(), "Analysis error: test analysis error");

        let error = LexisError::lexicon("test lexicon error");
        assert_eq!(error.to_string(), "Lexicon error: test lexicon error");

        let error = LexisError::model("test model error");
        assert_eq!(error.to_string(), "Model error: test model error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let lexis_error = LexisError::from(io_error);

        match lexis_error {
            LexisError::Io(_) => {}
            _ => panic!("expected IO error variant"),
        }
    }
}
