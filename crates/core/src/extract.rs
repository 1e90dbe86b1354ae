//! Body text and image extraction.
//!
//! This module derives the per-article payload from a parsed [`Document`]:
//! the plain-text body, the ordered image list, and the combined
//! [`Extraction`] bundle that the record assembly consumes.

use chrono::{DateTime, Utc};
use url::Url;

use crate::Document;
use crate::dateguess;

/// The complete output of parsing a downloaded article page.
///
/// Every field degrades to empty or `None` when the page does not provide
/// it; extraction never fails.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub title: Option<String>,
    pub text: Option<String>,
    pub authors: Vec<String>,
    pub meta_description: Option<String>,
    pub meta_lang: Option<String>,
    pub meta_favicon: Option<String>,
    pub meta_keywords: Vec<String>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub top_image: Option<String>,
    pub meta_image: Option<String>,
    /// Publication date as declared by the page itself, if parseable.
    pub published_date: Option<DateTime<Utc>>,
}

/// Extracts the full article payload from a parsed document.
///
/// # Example
///
/// ```rust
/// use gazette_core::{Document, extract};
///
/// let doc = Document::parse("<html><head><title>News</title></head><body><p>Body</p></body></html>");
/// let extraction = extract(&doc);
/// assert_eq!(extraction.title, Some("News".to_string()));
/// ```
pub fn extract(doc: &Document) -> Extraction {
    let meta_image = doc.extract_meta_image();
    let images = extract_images(doc);
    let top_image = meta_image.clone().or_else(|| images.first().cloned());

    let published_date = doc
        .extract_published_hint()
        .as_deref()
        .and_then(dateguess::parse_date);

    Extraction {
        title: doc.extract_title(),
        text: extract_text(doc),
        authors: doc.extract_authors(),
        meta_description: doc.extract_description(),
        meta_lang: doc.extract_meta_lang(),
        meta_favicon: doc.extract_favicon(),
        meta_keywords: doc.extract_keywords(),
        tags: doc.extract_tags(),
        images,
        top_image,
        meta_image,
        published_date,
    }
}

/// Extracts the plain-text body of the article.
///
/// Paragraphs are taken from the `<article>` scope when one exists, then
/// from `<main>`, then from the whole document. Paragraph texts are joined
/// with blank lines.
pub fn extract_text(doc: &Document) -> Option<String> {
    for scope in &["article p", "main p", "p"] {
        if let Ok(elements) = doc.select(scope) {
            let paragraphs: Vec<String> = elements
                .iter()
                .map(|el| el.text().trim().to_string())
                .filter(|text| !text.is_empty())
                .collect();

            if !paragraphs.is_empty() {
                return Some(paragraphs.join("\n\n"));
            }
        }
    }

    None
}

/// Extracts every `<img src>` in document order.
///
/// Relative URLs are resolved against the document base URL when one is
/// known; unresolvable and `data:` sources are skipped. Duplicates are
/// dropped while preserving first-seen order.
pub fn extract_images(doc: &Document) -> Vec<String> {
    let mut images: Vec<String> = Vec::new();

    if let Ok(elements) = doc.select("img[src]") {
        for el in elements {
            let Some(src) = el.attr("src") else { continue };
            let src = src.trim();
            if src.is_empty() || src.starts_with("data:") {
                continue;
            }

            let Some(resolved) = resolve(src, doc.base_url()) else { continue };
            if !images.contains(&resolved) {
                images.push(resolved);
            }
        }
    }

    images
}

/// Resolve an image reference to an absolute URL
fn resolve(src: &str, base: Option<&Url>) -> Option<String> {
    match Url::parse(src) {
        Ok(url) => Some(url.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            base.and_then(|b| b.join(src).ok()).map(|u| u.to_string())
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <title>Storm Season Begins</title>
            <meta property="og:image" content="https://example.com/mast.jpg">
        </head>
        <body>
            <nav><p>Navigation junk</p></nav>
            <article>
                <p>The first paragraph of the article body.</p>
                <p>The second paragraph, with more detail.</p>
                <img src="/photos/storm.jpg">
                <img src="https://cdn.example.com/radar.png">
                <img src="/photos/storm.jpg">
            </article>
        </body>
        </html>
    "#;

    fn parse_with_base(html: &str) -> Document {
        let base = Url::parse("https://example.com/news/2024/storm").unwrap();
        Document::parse_with_url(html, Some(base))
    }

    #[test]
    fn test_extract_text_prefers_article_scope() {
        let doc = parse_with_base(ARTICLE_HTML);
        let text = extract_text(&doc).unwrap();

        assert!(text.contains("first paragraph"));
        assert!(text.contains("second paragraph"));
        assert!(!text.contains("Navigation junk"));
    }

    #[test]
    fn test_extract_text_falls_back_to_all_paragraphs() {
        let html = "<html><body><p>Only paragraph</p></body></html>";
        let doc = Document::parse(html);
        assert_eq!(extract_text(&doc), Some("Only paragraph".to_string()));
    }

    #[test]
    fn test_extract_text_empty_document() {
        let doc = Document::parse("<html><body><div>no paragraphs</div></body></html>");
        assert_eq!(extract_text(&doc), None);
    }

    #[test]
    fn test_extract_images_resolved_and_deduplicated() {
        let doc = parse_with_base(ARTICLE_HTML);
        let images = extract_images(&doc);

        assert_eq!(
            images,
            vec![
                "https://example.com/photos/storm.jpg".to_string(),
                "https://cdn.example.com/radar.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_images_skips_data_uris() {
        let html = r#"<html><body><img src="data:image/png;base64,AAAA"></body></html>"#;
        let doc = Document::parse(html);
        assert!(extract_images(&doc).is_empty());
    }

    #[test]
    fn test_extract_images_without_base_url() {
        let html = r#"<html><body><img src="/relative.jpg"><img src="https://example.com/abs.jpg"></body></html>"#;
        let doc = Document::parse(html);
        // Relative reference cannot be resolved without a base.
        assert_eq!(extract_images(&doc), vec!["https://example.com/abs.jpg".to_string()]);
    }

    #[test]
    fn test_top_image_prefers_meta_image() {
        let doc = parse_with_base(ARTICLE_HTML);
        let extraction = extract(&doc);

        assert_eq!(extraction.meta_image, Some("https://example.com/mast.jpg".to_string()));
        assert_eq!(extraction.top_image, Some("https://example.com/mast.jpg".to_string()));
    }

    #[test]
    fn test_top_image_falls_back_to_first_body_image() {
        let html = r#"
            <html><body>
                <img src="https://example.com/one.jpg">
                <img src="https://example.com/two.jpg">
            </body></html>
        "#;
        let doc = Document::parse(html);
        let extraction = extract(&doc);

        assert_eq!(extraction.meta_image, None);
        assert_eq!(extraction.top_image, Some("https://example.com/one.jpg".to_string()));
    }

    #[test]
    fn test_extraction_published_date_from_page() {
        let html = r#"
            <html><head>
                <meta property="article:published_time" content="2024-01-15T10:30:00Z">
            </head><body></body></html>
        "#;
        let doc = Document::parse(html);
        let extraction = extract(&doc);

        let date = extraction.published_date.unwrap();
        assert_eq!(date.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_extraction_all_fields_degrade() {
        let doc = Document::parse("<html><body></body></html>");
        let extraction = extract(&doc);

        assert_eq!(extraction.title, None);
        assert_eq!(extraction.text, None);
        assert!(extraction.authors.is_empty());
        assert!(extraction.images.is_empty());
        assert_eq!(extraction.published_date, None);
    }
}
