//! The normalized article record returned to clients.
//!
//! This module defines [`ArticleRecord`], the single entity of the system.
//! A record is constructed fresh per lookup, serialized once, and
//! discarded; there is no persistence and no shared state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized representation of one article.
///
/// `source_url` is always present and echoes the client-supplied input
/// verbatim. Every other field defaults to null or empty rather than
/// causing the lookup to fail; partial data is an accepted outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The URL the client asked for, echoed verbatim.
    pub source_url: String,

    /// Extracted article title.
    pub title: Option<String>,

    /// Auto-detected language of the title. Accuracy is not guaranteed.
    pub title_lang: Option<String>,

    /// Extracted article body text.
    pub text: Option<String>,

    /// Auto-detected language of the body text. Accuracy is not guaranteed.
    pub text_lang: Option<String>,

    /// Article authors, in page order.
    pub authors: Vec<String>,

    /// Best-guess publication date, serialized as ISO-8601.
    pub published_date: Option<DateTime<Utc>>,

    /// Human-readable explanation of how the date was determined.
    pub published_date_method: Option<String>,

    /// Accuracy of the date guess: "partial", "date", or "datetime".
    pub published_date_accuracy: Option<String>,

    /// Page meta description.
    pub meta_description: Option<String>,

    /// Language declared by the page itself.
    pub meta_lang: Option<String>,

    /// Favicon URL as declared by the page.
    pub meta_favicon: Option<String>,

    /// Meta keywords from the page head.
    pub meta_keywords: Vec<String>,

    /// Article tags.
    pub tags: Vec<String>,

    /// URL of every image found in the article, in document order.
    pub images: Vec<String>,

    /// The image in the top (mast) position of the article.
    pub top_image: Option<String>,

    /// The image declared in the page's meta properties.
    pub meta_image: Option<String>,
}
