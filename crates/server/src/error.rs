//! API error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors surfaced to API clients.
///
/// The article endpoint produces exactly one error shape: a 404 when the
/// download did not succeed, regardless of the underlying cause.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The article could not be downloaded.
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": "Article was not found" }))).into_response()
            }
        }
    }
}
