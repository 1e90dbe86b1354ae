//! Error types for article lookup operations.
//!
//! This module defines the main error type [`GazetteError`] which represents
//! all possible errors that can occur while downloading, parsing, and
//! normalizing an article.

use thiserror::Error;

/// Main error type for article lookup operations.
///
/// This enum represents all possible errors that can occur during HTTP
/// fetching, HTML parsing, date guessing, and language detection.
///
/// # Example
///
/// ```rust
/// use gazette_core::{GazetteError, detect_language};
///
/// match detect_language("") {
///     Ok(code) => println!("Detected: {}", code),
///     Err(GazetteError::UndetectableLanguage) => println!("No language found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum GazetteError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Download completed with a non-success HTTP status.
    ///
    /// The download state of an article is binary: either the body was
    /// retrieved with a 2xx status, or the article is treated as not found.
    #[error("Download failed with HTTP status {status}")]
    DownloadFailed { status: u16 },

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid or the document cannot
    /// be queried.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Date value found but outside the representable range.
    #[error("Invalid date value: {0}")]
    InvalidDate(String),

    /// No language could be determined for the given text.
    ///
    /// Returned for empty, whitespace-only, or undetectable input.
    #[error("Language could not be determined")]
    UndetectableLanguage,
}

/// Result type alias for GazetteError.
///
/// This is a convenience alias for `std::result::Result<T, GazetteError>`.
pub type Result<T> = std::result::Result<T, GazetteError>;
