//! Best-effort publication date guessing.
//!
//! Given an article URL and its raw HTML, [`guess_date`] walks a fixed set
//! of heuristics in priority order and reports the first hit together with
//! the method that produced it and an accuracy classification.
//!
//! # Example
//!
//! ```rust
//! use gazette_core::dateguess::{Accuracy, guess_date};
//!
//! let html = r#"<meta property="article:published_time" content="2024-01-15T10:30:00Z">"#;
//! let guess = guess_date("https://example.com/a", html).unwrap();
//! assert_eq!(guess.accuracy, Accuracy::Datetime);
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use url::Url;

use crate::{Document, Result};

/// Confidence classification for a guessed publication date.
///
/// The scale is fixed at four values; no other classification is ever
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// No date could be determined.
    None,
    /// Year and month are known; the day is a midpoint placeholder.
    Partial,
    /// The full calendar date is known, but not the time of day.
    Date,
    /// Date and time of day are both known.
    Datetime,
}

impl Accuracy {
    /// The wire label for this accuracy level.
    ///
    /// `None` maps to an absent field rather than a literal string.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Accuracy::None => None,
            Accuracy::Partial => Some("partial"),
            Accuracy::Date => Some("date"),
            Accuracy::Datetime => Some("datetime"),
        }
    }
}

/// The outcome of a date-guessing pass.
#[derive(Debug, Clone)]
pub struct DateGuess {
    /// The guessed publication date, absent when nothing was found.
    pub date: Option<DateTime<Utc>>,
    /// Confidence classification for the guess.
    pub accuracy: Accuracy,
    /// Human-readable explanation of how the date was determined.
    pub method: Option<String>,
}

impl DateGuess {
    /// A guess representing "nothing found".
    pub fn none() -> Self {
        Self { date: None, accuracy: Accuracy::None, method: None }
    }

    fn found(date: DateTime<Utc>, accuracy: Accuracy, method: &str) -> Self {
        Self { date: Some(date), accuracy, method: Some(method.to_string()) }
    }
}

/// Guesses the publication date of an article.
///
/// Heuristics run in priority order:
/// 1. `<meta article:published_time>` (and the `og:`-prefixed form)
/// 2. JSON-LD `datePublished`
/// 3. `<time datetime="">` element
/// 4. `<meta date>` / `DC.date` / `DC.date.issued`
/// 5. Date components in the URL path
///
/// A guess with accuracy [`Accuracy::None`] is a successful outcome, not an
/// error; `Err` is reserved for failures of the guessing machinery itself.
pub fn guess_date(url: &str, html: &str) -> Result<DateGuess> {
    let doc = Document::parse(html);

    for attr in &["article:published_time", "og:article:published_time"] {
        if let Some(value) = doc.meta_content(attr)
            && let Some((date, accuracy)) = parse_with_accuracy(&value)
        {
            return Ok(DateGuess::found(date, accuracy, &format!("Found <meta {}> in HTML", attr)));
        }
    }

    for block in doc.json_ld_blocks() {
        if let Some(value) = block.get("datePublished").and_then(|v| v.as_str())
            && let Some((date, accuracy)) = parse_with_accuracy(value)
        {
            return Ok(DateGuess::found(date, accuracy, "Found datePublished in JSON-LD metadata"));
        }
    }

    if let Ok(elements) = doc.select("time[datetime]") {
        for el in elements {
            if let Some(value) = el.attr("datetime")
                && let Some((date, accuracy)) = parse_with_accuracy(value)
            {
                return Ok(DateGuess::found(date, accuracy, "Found <time datetime> element in HTML"));
            }
        }
    }

    for attr in &["date", "DC.date", "DC.date.issued"] {
        if let Some(value) = doc.meta_content(attr)
            && let Some((date, accuracy)) = parse_with_accuracy(&value)
        {
            return Ok(DateGuess::found(date, accuracy, &format!("Found <meta {}> in HTML", attr)));
        }
    }

    if let Some(guess) = guess_from_url(url) {
        return Ok(guess);
    }

    Ok(DateGuess::none())
}

/// Guess a date from `/YYYY/MM/DD/` or `/YYYY/MM/` segments in the URL path
fn guess_from_url(url: &str) -> Option<DateGuess> {
    let parsed = Url::parse(url).ok();
    let path = parsed.as_ref().map(|u| u.path()).unwrap_or(url);

    let pattern = Regex::new(r"/(\d{4})/(\d{1,2})(?:/(\d{1,2}))?(?:/|$)").unwrap();

    for caps in pattern.captures_iter(path) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        if year < 1990 || year > 2100 {
            continue;
        }

        match caps.get(3) {
            Some(day) => {
                let day: u32 = day.as_str().parse().ok()?;
                if let Some(date) = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single() {
                    return Some(DateGuess::found(date, Accuracy::Date, "Found year, month and day in URL path"));
                }
            }
            // Day unknown: pin to the middle of the month.
            None => {
                if let Some(date) = Utc.with_ymd_and_hms(year, month, 15, 0, 0, 0).single() {
                    return Some(DateGuess::found(date, Accuracy::Partial, "Found year and month in URL path"));
                }
            }
        }
    }

    None
}

const DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Parse a date string, classifying whether it carried a time of day
fn parse_with_accuracy(value: &str) -> Option<(DateTime<Utc>, Accuracy)> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some((date.with_timezone(&Utc), Accuracy::Datetime));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(value) {
        return Some((date.with_timezone(&Utc), Accuracy::Datetime));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some((Utc.from_utc_datetime(&naive), Accuracy::Datetime));
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(naive) = NaiveDate::parse_from_str(value, fmt) {
            let midnight = naive.and_hms_opt(0, 0, 0)?;
            return Some((Utc.from_utc_datetime(&midnight), Accuracy::Date));
        }
    }

    None
}

/// Parse a page-declared date string without accuracy classification
pub(crate) fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    parse_with_accuracy(value).map(|(date, _)| date)
}
