//! Handler for ROI link generation.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;
use tracing::debug;
use validator::Validate;

use crate::api::dto::roi_link::{RoiLinkQuery, RoiLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Builds a shareable ROI calculator link.
///
/// # Endpoint
///
/// `GET /api/roi-link?h=10&r=150&w=4&p=5000[&pilot=abc][&pathname=/calculator]`
///
/// # Response
///
/// ```json
/// {
///   "href": "/?h=10&r=150&w=4&p=5000&pilot=abc#roi",
///   "url": "https://pilots.example.com/?h=10&r=150&w=4&p=5000&pilot=abc#roi"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a number is missing, unparsable or non-finite,
/// or if `pilot` / `pathname` fail validation.
pub async fn roi_link_handler(
    State(state): State<AppState>,
    query: Result<Query<RoiLinkQuery>, QueryRejection>,
) -> Result<Json<RoiLinkResponse>, AppError> {
    let Query(query) = query.map_err(|e| {
        debug!("Rejected ROI link query: {}", e);
        AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
    })?;

    let query = query.normalized();
    query.validate()?;

    let preset = query.preset();
    preset.validate()?;

    let options = query.options();

    Ok(Json(RoiLinkResponse {
        href: state.roi_service.href(&preset, &options),
        url: state.roi_service.share_url(&preset, &options),
    }))
}
