//! Process-wide service configuration.
//!
//! All values are fixed at startup; nothing here mutates at runtime.

use gazette_core::FetchConfig;

/// Immutable startup-time configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service title, used in logs and the service info route.
    pub title: String,
    /// Short human-readable description of the service.
    pub description: String,
    /// Crate version, baked in at compile time.
    pub version: String,
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Outbound fetch settings used for article downloads.
    pub fetch: FetchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Gazette Article Lookup".to_string(),
            description: "Accepts an article URL, downloads and parses the page, and returns a \
                          normalized JSON record: title, body text, authors, images, publication \
                          date and detected languages."
                .to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration, honoring the `GAZETTE_ADDR` bind override.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("GAZETTE_ADDR") {
            config.listen_addr = addr;
        }
        config
    }
}
