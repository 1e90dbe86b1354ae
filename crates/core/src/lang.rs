//! Language detection for extracted text.
//!
//! Thin wrapper over the `whatlang` trigram detector. Detection is
//! fallible by contract: empty or undetectable input is an error, which
//! callers convert into an absent language field.

use crate::{GazetteError, Result};

/// Detects the language of a piece of text.
///
/// Returns the ISO 639-3 code of the most likely language.
///
/// # Errors
///
/// Returns [`GazetteError::UndetectableLanguage`] for empty,
/// whitespace-only, or undetectable input.
///
/// # Example
///
/// ```rust
/// use gazette_core::detect_language;
///
/// let code = detect_language("The quick brown fox jumps over the lazy dog").unwrap();
/// assert_eq!(code, "eng");
/// ```
pub fn detect_language(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GazetteError::UndetectableLanguage);
    }

    match whatlang::detect(text) {
        Some(info) => Ok(info.lang().code().to_string()),
        None => Err(GazetteError::UndetectableLanguage),
    }
}
