//! Error types for seoscope operations.
//!
//! This module defines the main error type [`SeoscopeError`]. Only two kinds of
//! failure exist in an analysis run: reading the input (fatal for the run) and
//! requesting suggestions from the remote model (recovered by the caller with
//! canned fallback text).
//!
//! # Example
//!
//! ```rust
//! use seoscope_core::{SeoscopeError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.is_empty() {
//!         return Err(SeoscopeError::InvalidConfig("empty input".to_string()));
//!     }
//!     Ok(text)
//! }
//! # assert!(require_text("").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analysis and suggestion operations.
#[derive(Error, Debug)]
pub enum SeoscopeError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps connection failures, DNS failures, TLS problems and response body
    /// decoding errors raised while talking to the completion endpoint.
    #[cfg(feature = "remote")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The completion endpoint answered with a non-success status.
    #[error("Completion API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The completion endpoint answered, but not with a usable completion.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// File not found.
    ///
    /// Returned when the input document does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read errors, including invalid UTF-8 content.
    #[error("Failed to read input: {0}")]
    ReadError(#[from] std::io::Error),

    /// Invalid configuration, e.g. an unparsable API base URL.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

/// Result type alias for SeoscopeError.
pub type Result<T> = std::result::Result<T, SeoscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeoscopeError::InvalidConfig("bad url".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("bad url"));
    }

    #[test]
    fn test_api_error() {
        let err = SeoscopeError::ApiError { status: 401, message: "invalid api key".to_string() };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid api key"));
    }

    #[test]
    fn test_timeout_error() {
        let err = SeoscopeError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_file_not_found_error() {
        let err = SeoscopeError::FileNotFound(PathBuf::from("missing.txt"));
        assert!(err.to_string().contains("missing.txt"));
    }
}
