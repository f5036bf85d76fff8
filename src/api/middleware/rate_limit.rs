//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

const PER_SECOND: u64 = 5;
const BURST_SIZE: u32 = 50;

/// Creates a rate limiter for the JSON API keyed by peer socket address.
///
/// # Limits
///
/// - **Rate**: 5 requests per second
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Errors
///
/// Returns an error if the quota is rejected by `governor`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/roi-link", get(roi_link_handler))
///     .layer(rate_limit::layer()?);
/// ```
pub fn layer()
-> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .context("Invalid rate limit quota")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

/// Same limits as [`layer`], keyed by `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded` with fallback to the peer address.
///
/// Use only behind a trusted reverse proxy; clients can forge these headers.
///
/// # Errors
///
/// Returns an error if the quota is rejected by `governor`.
pub fn proxied_layer()
-> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .context("Invalid rate limit quota")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
