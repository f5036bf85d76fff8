//! API route configuration.
//!
//! All API endpoints are public and rate limited per client IP via
//! [`crate::api::middleware::rate_limit`].

use crate::api::handlers::{api_not_found_handler, roi_estimate_handler, roi_link_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /roi-link`     - Relative and absolute ROI calculator link for a preset
/// - `GET /roi-estimate` - ROI figures for a preset
///
/// Anything else under `/api` gets a JSON 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/roi-link", get(roi_link_handler))
        .route("/roi-estimate", get(roi_estimate_handler))
        .fallback(api_not_found_handler)
}
