//! Error types for Precis operations.
//!
//! This module defines the main error type [`PrecisError`] which represents
//! the errors that can occur around summarization: reading input, fetching
//! pages, and validating configuration. Summarizing a string never fails.
//!
//! # Example
//!
//! ```rust
//! use precis_core::{PrecisError, Result, SummaryConfig};
//!
//! fn checked_config(ratio: f64) -> Result<SummaryConfig> {
//!     let config = SummaryConfig::builder().ratio(ratio).build();
//!     config.validate()?;
//!     Ok(config)
//! }
//!
//! assert!(matches!(checked_config(0.0), Err(PrecisError::InvalidConfig(_))));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for summarization support operations.
///
/// # Example
///
/// ```rust
/// use precis_core::{Language, PrecisError};
///
/// match "klingon".parse::<Language>() {
///     Ok(lang) => println!("Using {:?}", lang),
///     Err(PrecisError::UnsupportedLanguage(name)) => println!("No stop-words for {}", name),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PrecisError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No stop-word list exists for the requested language.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Summary configuration values are out of range.
    ///
    /// Returned by [`crate::SummaryConfig::validate`] when, for example, the
    /// ratio is not in `(0, 1]` or the minimum exceeds the maximum.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization failures.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for PrecisError.
///
/// This is a convenience alias for `std::result::Result<T, PrecisError>`.
pub type Result<T> = std::result::Result<T, PrecisError>;
