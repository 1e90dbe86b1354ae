//! Route definitions and request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use gazette_core::ArticleRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/v0/article", get(get_article))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Query parameters for the article endpoint.
#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    /// The URL of the requested article.
    pub url: String,
}

/// `GET /v0/article?url=...`
///
/// Downloads the article and returns its normalized record. Every download
/// failure (network error, timeout, HTTP error status) collapses into the
/// same 404 response; nothing after a successful download can fail the
/// request.
async fn get_article(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleQuery>,
) -> Result<Json<ArticleRecord>, ApiError> {
    match state.scraper.scrape(&query.url).await {
        Ok(record) => Ok(Json(record)),
        Err(err) => {
            tracing::debug!(url = %query.url, error = %err, "article download failed");
            Err(ApiError::NotFound)
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Service metadata, mirroring the startup configuration.
async fn service_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "title": state.config.title,
        "description": state.config.description,
        "version": state.config.version,
    }))
}
