//! Fallback for unknown API paths.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers any unmatched `/api/*` request with a JSON 404.
///
/// `path` in the details is relative to `/api`.
pub async fn api_not_found_handler(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "Unknown API endpoint");
    AppError::not_found("Unknown API endpoint", json!({ "path": uri.path() }))
}
