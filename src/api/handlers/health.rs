//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "site_url": "https://pilots.example.com/",
///   "offers": 2
/// }
/// ```
///
/// The service has no external dependencies, so it is healthy whenever it
/// answers.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        site_url: state.seo.site_url.to_string(),
        offers: state.roi_service.catalog().len(),
    })
}
