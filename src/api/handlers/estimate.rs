//! Handler for ROI estimates.

use axum::{Json, extract::Query};

use crate::api::dto::estimate::RoiEstimateResponse;
use crate::domain::{RoiPreset, RoiQuery};
use crate::error::AppError;

/// Computes the ROI estimate for a preset.
///
/// # Endpoint
///
/// `GET /api/roi-estimate?h=10&r=150&w=4&p=5000`
///
/// # Response
///
/// ```json
/// {
///   "preset": { "hours": 10.0, "rate": 150.0, "weeks": 4.0, "price": 5000.0 },
///   "estimate": {
///     "weekly_value": 1500.0,
///     "pilot_value": 6000.0,
///     "net_return": 1000.0,
///     "roi_multiple": 1.2,
///     "payback_weeks": 3.3333333333333335
///   },
///   "profitable": true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request naming the offending field when a value is
/// missing, unparsable or non-finite.
pub async fn roi_estimate_handler(
    Query(query): Query<RoiQuery>,
) -> Result<Json<RoiEstimateResponse>, AppError> {
    let preset = RoiPreset::from_query(&query)?;
    Ok(Json(preset.into()))
}
