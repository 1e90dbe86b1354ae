//! Article download over HTTP.
//!
//! This module performs the single outbound network operation of the
//! system: retrieving the HTML body of an article URL. The outcome is
//! binary: either the body arrives with a success status, or the download
//! failed and the caller treats the article as not found.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{GazetteError, Result};

/// HTTP client configuration for downloading article pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; Gazette/0.1)".to_string() }
    }
}

/// Downloads the HTML body of an article URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and uses
/// a browser-like User-Agent for better compatibility.
///
/// Every failure mode (malformed URL, DNS failure, refused connection,
/// timeout, non-2xx status) returns an error. Callers collapse all of them
/// into the same "article not found" outcome.
pub async fn download(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| GazetteError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
        return Err(GazetteError::InvalidUrl(format!("unsupported scheme: {}", parsed_url.scheme())));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(GazetteError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                GazetteError::Timeout { timeout: config.timeout }
            } else {
                GazetteError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(GazetteError::DownloadFailed { status: status.as_u16() });
    }

    let body = response.text().await?;

    Ok(body)
}
