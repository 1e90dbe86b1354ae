use crate::Document;

impl Document {
    /// Extract title with priority fallback:
    /// 1. JSON-LD `headline`
    /// 2. Open Graph `og:title`
    /// 3. Twitter `twitter:title`
    /// 4. Meta `title` / `DC.title`
    /// 5. `<title>` element
    /// 6. First `<h1>` element
    pub fn extract_title(&self) -> Option<String> {
        for json_ld in self.json_ld_blocks() {
            if let Some(headline) = json_ld.get("headline")
                && let Some(value) = headline.as_str()
            {
                return Some(value.to_string());
            }
        }

        if let Some(title) = self.meta_content("og:title") {
            return Some(title);
        }

        if let Some(title) = self.meta_content("twitter:title") {
            return Some(title);
        }

        if let Some(title) = self.meta_content("title") {
            return Some(title);
        }
        if let Some(title) = self.meta_content("DC.title") {
            return Some(title);
        }

        if let Some(title) = self.title() {
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }

        if let Ok(elements) = self.select("h1")
            && let Some(first) = elements.first()
        {
            let text = first.text();
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }

        None
    }

    /// Extract the ordered author list with priority fallback:
    /// 1. JSON-LD `author` (string, object, or array of either)
    /// 2. Meta `author` / `article:author` / `DC.creator`
    /// 3. `[rel="author"]` link text
    /// 4. `[itemprop="author"]` text
    ///
    /// Comma-separated names inside a single value are split apart.
    /// Duplicates are dropped while preserving first-seen order.
    pub fn extract_authors(&self) -> Vec<String> {
        let mut authors: Vec<String> = Vec::new();

        for json_ld in self.json_ld_blocks() {
            if let Some(author) = json_ld.get("author") {
                collect_json_ld_authors(author, &mut authors);
            }
        }

        if authors.is_empty() {
            for attr in &["author", "article:author", "DC.creator"] {
                if let Some(content) = self.meta_content(attr) {
                    for name in split_author_names(&content) {
                        push_unique(&mut authors, name);
                    }
                }
            }
        }

        if authors.is_empty()
            && let Ok(elements) = self.select("[rel=\"author\"]")
        {
            for el in elements {
                let text = el.text();
                let text = text.trim();
                if !text.is_empty() && text.len() < 100 {
                    push_unique(&mut authors, text.to_string());
                }
            }
        }

        if authors.is_empty()
            && let Ok(elements) = self.select("[itemprop=\"author\"]")
        {
            for el in elements {
                let text = el.text();
                let text = text.trim();
                if !text.is_empty() && text.len() < 100 {
                    push_unique(&mut authors, text.to_string());
                }
            }
        }

        authors
    }

    /// Extract the meta description with priority fallback:
    /// 1. Open Graph `og:description`
    /// 2. Twitter `twitter:description`
    /// 3. Meta `description`
    pub fn extract_description(&self) -> Option<String> {
        if let Some(desc) = self.meta_content("og:description") {
            return Some(desc);
        }

        if let Some(desc) = self.meta_content("twitter:description") {
            return Some(desc);
        }

        self.meta_content("description")
    }

    /// Extract the declared page language.
    ///
    /// Reads the `<html lang>` attribute, falling back to the
    /// `Content-Language` http-equiv meta tag. The value is normalized to
    /// its lowercase primary subtag (`en-US` becomes `en`).
    pub fn extract_meta_lang(&self) -> Option<String> {
        if let Some(lang) = self.html_lang() {
            return normalize_lang(&lang);
        }

        if let Ok(elements) = self.select("meta[http-equiv]") {
            for el in elements {
                if let Some(equiv) = el.attr("http-equiv")
                    && equiv.eq_ignore_ascii_case("content-language")
                    && let Some(content) = el.attr("content")
                {
                    return normalize_lang(content);
                }
            }
        }

        None
    }

    /// Extract the favicon URL from `<link rel>` icon variants.
    ///
    /// The href is returned as found in the page, not resolved.
    pub fn extract_favicon(&self) -> Option<String> {
        for rel in &["icon", "shortcut icon", "apple-touch-icon"] {
            let selector = format!("link[rel=\"{}\"]", rel);
            if let Ok(elements) = self.select(&selector)
                && let Some(el) = elements.first()
                && let Some(href) = el.attr("href")
            {
                return Some(href.to_string());
            }
        }

        None
    }

    /// Extract meta keywords as a list, split on commas.
    pub fn extract_keywords(&self) -> Vec<String> {
        let Some(content) = self.meta_content("keywords") else {
            return Vec::new();
        };

        content
            .split(',')
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    }

    /// Extract article tags from `article:tag` meta properties and
    /// `[rel="tag"]` links, deduplicated in first-seen order.
    pub fn extract_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();

        if let Ok(elements) = self.select("meta[property=\"article:tag\"]") {
            for el in elements {
                if let Some(content) = el.attr("content") {
                    let content = content.trim();
                    if !content.is_empty() {
                        push_unique(&mut tags, content.to_string());
                    }
                }
            }
        }

        if let Ok(elements) = self.select("a[rel=\"tag\"]") {
            for el in elements {
                let text = el.text();
                let text = text.trim();
                if !text.is_empty() {
                    push_unique(&mut tags, text.to_string());
                }
            }
        }

        tags
    }

    /// Extract the distinguished meta image with priority fallback:
    /// 1. Open Graph `og:image` / `og:image:url`
    /// 2. Twitter `twitter:image`
    /// 3. `<link rel="image_src">`
    pub fn extract_meta_image(&self) -> Option<String> {
        if let Some(image) = self.meta_content("og:image") {
            return Some(image);
        }
        if let Some(image) = self.meta_content("og:image:url") {
            return Some(image);
        }

        if let Some(image) = self.meta_content("twitter:image") {
            return Some(image);
        }

        if let Ok(elements) = self.select("link[rel=\"image_src\"]")
            && let Some(el) = elements.first()
            && let Some(href) = el.attr("href")
        {
            return Some(href.to_string());
        }

        None
    }

    /// Extract the raw publication date string as declared by the page:
    /// 1. Meta `article:published_time`
    /// 2. JSON-LD `datePublished`
    /// 3. `<time datetime="">` element
    /// 4. Meta `date` / `DC.date` / `DC.date.issued`
    ///
    /// The value is returned verbatim; parsing is the caller's concern.
    pub fn extract_published_hint(&self) -> Option<String> {
        if let Some(date) = self.meta_content("article:published_time") {
            return Some(date);
        }

        for json_ld in self.json_ld_blocks() {
            if let Some(date) = json_ld.get("datePublished")
                && let Some(value) = date.as_str()
            {
                return Some(value.to_string());
            }
        }

        if let Ok(elements) = self.select("time[datetime]")
            && let Some(first) = elements.first()
            && let Some(datetime) = first.attr("datetime")
        {
            return Some(datetime.to_string());
        }

        for attr in &["date", "DC.date", "DC.date.issued"] {
            if let Some(date) = self.meta_content(attr) {
                return Some(date);
            }
        }

        None
    }

    /// Get meta tag content by name or property attribute
    pub(crate) fn meta_content(&self, attr: &str) -> Option<String> {
        let selector = format!("meta[name=\"{}\"]", attr);
        if let Ok(elements) = self.select(&selector)
            && let Some(el) = elements.first()
            && let Some(content) = el.attr("content")
        {
            return Some(content.to_string());
        }

        let selector = format!("meta[property=\"{}\"]", attr);
        if let Ok(elements) = self.select(&selector)
            && let Some(el) = elements.first()
            && let Some(content) = el.attr("content")
        {
            return Some(content.to_string());
        }

        None
    }

    /// Extract and parse every JSON-LD block in the document
    pub(crate) fn json_ld_blocks(&self) -> Vec<serde_json::Value> {
        let mut blocks = Vec::new();

        if let Ok(elements) = self.select("script[type=\"application/ld+json\"]") {
            for el in elements {
                let text = el.text();
                let json_str = text.trim();
                if let Ok(value) = serde_json::from_str::<serde_json::Value>(json_str) {
                    blocks.push(value);
                }
            }
        }

        blocks
    }
}

/// Collect author names from a JSON-LD author value.
/// Handles string, object, and array formats.
fn collect_json_ld_authors(author: &serde_json::Value, out: &mut Vec<String>) {
    match author {
        serde_json::Value::String(name) => {
            let name = name.trim();
            if !name.is_empty() {
                push_unique(out, name.to_string());
            }
        }
        serde_json::Value::Object(obj) => {
            if let Some(name) = obj.get("name")
                && let Some(name) = name.as_str()
            {
                let name = name.trim();
                if !name.is_empty() {
                    push_unique(out, name.to_string());
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for entry in arr {
                collect_json_ld_authors(entry, out);
            }
        }
        _ => {}
    }
}

/// Split a byline-style value ("A, B and C") into individual names
fn split_author_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .flat_map(|part| part.split(" and "))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn normalize_lang(value: &str) -> Option<String> {
    let primary = value.split(['-', '_']).next()?.trim().to_lowercase();
    if primary.is_empty() { None } else { Some(primary) }
}
