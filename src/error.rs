//! Error types for keypad-words.
//!
//! All fallible operations return [`KeypadError`] through the crate-wide
//! [`Result`] alias. Unmapped digits are not errors: they surface as empty
//! permutation sets in the data model instead.
//!
//! # Examples
//!
//! ```
//! use keypad_words::error::{KeypadError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(KeypadError::dictionary_load(Some(404), "Not Found"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::time::Duration;

use thiserror::Error;

/// The main error type for keypad-words operations.
#[derive(Error, Debug)]
pub enum KeypadError {
    /// I/O errors (dictionary files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The word list could not be fetched or parsed.
    #[error("Dictionary load error{}: {message}", status_suffix(.status))]
    DictionaryLoad {
        /// Transport status code, when the failure came from a response.
        status: Option<u16>,
        /// Human readable description of the failure.
        message: String,
    },

    /// Loading the word list took longer than the configured bound.
    #[error("Dictionary load timed out after {0:?}")]
    DictionaryTimeout(Duration),

    /// Input rejected by strict validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}

/// Result type alias for operations that may fail with KeypadError.
pub type Result<T> = std::result::Result<T, KeypadError>;

impl KeypadError {
    /// Create a new dictionary load error.
    pub fn dictionary_load<S: Into<String>>(status: Option<u16>, msg: S) -> Self {
        KeypadError::DictionaryLoad {
            status,
            message: msg.into(),
        }
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        KeypadError::InvalidInput(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        KeypadError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KeypadError::Other(msg.into())
    }

    /// Whether this error means the dictionary was unavailable.
    pub fn is_dictionary_failure(&self) -> bool {
        matches!(
            self,
            KeypadError::DictionaryLoad { .. } | KeypadError::DictionaryTimeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = KeypadError::dictionary_load(Some(503), "Service Unavailable");
        assert_eq!(
            error.to_string(),
            "Dictionary load error (status 503): Service Unavailable"
        );

        let error = KeypadError::dictionary_load(None, "connection refused");
        assert_eq!(error.to_string(), "Dictionary load error: connection refused");

        let error = KeypadError::invalid_input("unexpected 'a'");
        assert_eq!(error.to_string(), "Invalid input: unexpected 'a'");
    }

    #[test]
    fn test_dictionary_failure_kinds() {
        assert!(KeypadError::dictionary_load(None, "x").is_dictionary_failure());
        assert!(KeypadError::DictionaryTimeout(Duration::from_secs(1)).is_dictionary_failure());
        assert!(!KeypadError::other("x").is_dictionary_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = KeypadError::from(io_error);

        match error {
            KeypadError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
