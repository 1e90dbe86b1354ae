//! HTTP surface for the article lookup service.
//!
//! One endpoint: `GET /v0/article?url=...` downloads, parses, and returns
//! a normalized article record. Any download failure is collapsed into a
//! single 404 outcome.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::router;
pub use state::AppState;
