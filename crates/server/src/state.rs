//! Shared application state.

use gazette_core::ArticleScraper;

use crate::config::AppConfig;

/// State shared across request handlers.
///
/// Everything here is read-only after startup; requests share it behind
/// an `Arc` with no locking.
pub struct AppState {
    pub config: AppConfig,
    pub scraper: ArticleScraper,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let scraper = ArticleScraper::with_config(config.fetch.clone());
        Self { config, scraper }
    }
}
