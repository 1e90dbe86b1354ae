//! Article lookup: download, extract, and assemble one record.
//!
//! This module ties the pipeline together: fetch the page, parse and
//! extract its payload, guess the publication date, detect languages, and
//! assemble a single [`ArticleRecord`]. The steps after a successful
//! download never fail the lookup; they only degrade individual fields.
//!
//! # Example
//!
//! ```rust
//! use gazette_core::ArticleScraper;
//!
//! # #[tokio::main]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scraper = ArticleScraper::new();
//! let record = scraper.scrape("https://example.com/article").await?;
//! println!("Title: {:?}", record.title);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use url::Url;

use crate::article::ArticleRecord;
use crate::dateguess::{DateGuess, guess_date};
use crate::extract::extract;
use crate::fetch::{FetchConfig, download};
use crate::lang::detect_language;
use crate::parse::Document;
use crate::Result;

/// Entry point for article lookups.
pub struct ArticleScraper {
    fetch: FetchConfig,
}

impl ArticleScraper {
    /// Creates a scraper with default fetch settings.
    pub fn new() -> Self {
        Self { fetch: FetchConfig::default() }
    }

    /// Creates a scraper with a custom fetch configuration.
    pub fn with_config(fetch: FetchConfig) -> Self {
        Self { fetch }
    }

    /// Downloads an article and assembles its record.
    ///
    /// # Errors
    ///
    /// Any download failure (malformed URL, network error, timeout, or a
    /// non-success HTTP status) is returned as-is. Nothing after the
    /// download can fail the lookup.
    pub async fn scrape(&self, url: &str) -> Result<ArticleRecord> {
        let html = download(url, &self.fetch).await?;
        Ok(self.from_html(url, &html))
    }

    /// Assembles a record from already-downloaded HTML.
    ///
    /// Date guessing and language detection failures are swallowed here:
    /// a failed date guess falls back to the page-declared date, and a
    /// failed language detection leaves that one language field absent.
    pub fn from_html(&self, url: &str, html: &str) -> ArticleRecord {
        let base = Url::parse(url).ok();
        let doc = Document::parse_with_url(html, base);
        let extraction = extract(&doc);

        let (published_date, published_date_method, published_date_accuracy) =
            resolve_date(guess_date(url, html), extraction.published_date);

        let title_lang = extraction.title.as_deref().and_then(|t| detect_language(t).ok());
        let text_lang = extraction.text.as_deref().and_then(|t| detect_language(t).ok());

        ArticleRecord {
            source_url: url.to_string(),
            title: extraction.title,
            title_lang,
            text: extraction.text,
            text_lang,
            authors: extraction.authors,
            published_date,
            published_date_method,
            published_date_accuracy,
            meta_description: extraction.meta_description,
            meta_lang: extraction.meta_lang,
            meta_favicon: extraction.meta_favicon,
            meta_keywords: extraction.meta_keywords,
            tags: extraction.tags,
            images: extraction.images,
            top_image: extraction.top_image,
            meta_image: extraction.meta_image,
        }
    }
}

impl Default for ArticleScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold the date-guessing outcome into record fields.
///
/// A successful guess wins outright, even when it found nothing. A failed
/// guess falls back to the page-declared date with no method or accuracy.
/// All guessing errors are swallowed uniformly; a date is never worth
/// failing the lookup over.
fn resolve_date(
    guess: Result<DateGuess>,
    page_date: Option<DateTime<Utc>>,
) -> (Option<DateTime<Utc>>, Option<String>, Option<String>) {
    match guess {
        Ok(guess) => {
            let accuracy = guess.accuracy.label().map(|label| label.to_string());
            (guess.date, guess.method, accuracy)
        }
        Err(_) => (page_date, None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GazetteError;
    use crate::dateguess::Accuracy;
    use chrono::TimeZone;

    const ARTICLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <title>Storm season begins along the gulf coast</title>
            <meta name="author" content="Jane Smith, Robert Brown">
            <meta name="description" content="Forecasters warn of an active season.">
            <meta property="og:image" content="https://example.com/mast.jpg">
            <meta property="article:published_time" content="2024-06-01T08:00:00Z">
            <meta property="article:tag" content="weather">
            <link rel="icon" href="/favicon.ico">
        </head>
        <body>
            <article>
                <p>Forecasters are warning that this storm season could be one of the most
                active in recent memory, with warmer waters fueling stronger systems.</p>
                <p>Coastal residents are being urged to prepare early and review their
                evacuation plans before the first storms arrive.</p>
                <img src="/photos/waves.jpg">
            </article>
        </body>
        </html>
    "#;

    #[test]
    fn test_from_html_assembles_record() {
        let scraper = ArticleScraper::new();
        let record = scraper.from_html("https://example.com/news/storm-season", ARTICLE_HTML);

        assert_eq!(record.source_url, "https://example.com/news/storm-season");
        assert_eq!(record.title, Some("Storm season begins along the gulf coast".to_string()));
        assert_eq!(record.authors, vec!["Jane Smith".to_string(), "Robert Brown".to_string()]);
        assert_eq!(record.meta_description, Some("Forecasters warn of an active season.".to_string()));
        assert_eq!(record.meta_lang, Some("en".to_string()));
        assert_eq!(record.meta_favicon, Some("/favicon.ico".to_string()));
        assert_eq!(record.tags, vec!["weather".to_string()]);
        assert_eq!(record.images, vec!["https://example.com/photos/waves.jpg".to_string()]);
        assert_eq!(record.top_image, Some("https://example.com/mast.jpg".to_string()));
        assert!(record.text.unwrap().contains("storm season"));
    }

    #[test]
    fn test_from_html_date_guess_populates_all_three_fields() {
        let scraper = ArticleScraper::new();
        let record = scraper.from_html("https://example.com/news/storm-season", ARTICLE_HTML);

        assert_eq!(record.published_date.unwrap().to_rfc3339(), "2024-06-01T08:00:00+00:00");
        assert_eq!(record.published_date_accuracy, Some("datetime".to_string()));
        assert!(record.published_date_method.unwrap().contains("article:published_time"));
    }

    #[test]
    fn test_from_html_detects_languages() {
        let scraper = ArticleScraper::new();
        let record = scraper.from_html("https://example.com/news/storm-season", ARTICLE_HTML);

        assert!(record.title_lang.is_some());
        assert_eq!(record.text_lang, Some("eng".to_string()));
    }

    #[test]
    fn test_from_html_empty_page_degrades_every_field() {
        let scraper = ArticleScraper::new();
        let record = scraper.from_html("https://example.com/empty", "<html><body></body></html>");

        assert_eq!(record.source_url, "https://example.com/empty");
        assert_eq!(record.title, None);
        assert_eq!(record.title_lang, None);
        assert_eq!(record.text, None);
        assert_eq!(record.text_lang, None);
        assert!(record.authors.is_empty());
        assert_eq!(record.published_date, None);
        assert_eq!(record.published_date_accuracy, None);
    }

    #[test]
    fn test_language_fields_degrade_independently() {
        // A title without any letters defeats detection; the body language
        // is still reported.
        let html = r#"
            <html>
            <head><title>2024 03 05</title></head>
            <body>
                <article>
                    <p>The committee published its annual report on Thursday, noting a
                    steady increase in membership across the region.</p>
                </article>
            </body>
            </html>
        "#;
        let scraper = ArticleScraper::new();
        let record = scraper.from_html("https://example.com/report", html);

        assert_eq!(record.title, Some("2024 03 05".to_string()));
        assert_eq!(record.title_lang, None);
        assert_eq!(record.text_lang, Some("eng".to_string()));
    }

    #[test]
    fn test_resolve_date_successful_guess_wins() {
        let guessed = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).single().unwrap();
        let page_date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single();

        let guess = DateGuess {
            date: Some(guessed),
            accuracy: Accuracy::Date,
            method: Some("Found year, month and day in URL path".to_string()),
        };
        let (date, method, accuracy) = resolve_date(Ok(guess), page_date);

        assert_eq!(date, Some(guessed));
        assert!(method.unwrap().contains("URL path"));
        assert_eq!(accuracy, Some("date".to_string()));
    }

    #[test]
    fn test_resolve_date_empty_guess_overrides_page_date() {
        // A guess that found nothing is still a successful guess; the
        // page-declared date is not restored.
        let page_date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single();
        let (date, method, accuracy) = resolve_date(Ok(DateGuess::none()), page_date);

        assert_eq!(date, None);
        assert_eq!(method, None);
        assert_eq!(accuracy, None);
    }

    #[test]
    fn test_resolve_date_error_falls_back_to_page_date() {
        let page_date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single();
        let err = Err(GazetteError::HtmlParseError("boom".to_string()));
        let (date, method, accuracy) = resolve_date(err, page_date);

        assert_eq!(date, page_date);
        assert_eq!(method, None);
        assert_eq!(accuracy, None);
    }
}
