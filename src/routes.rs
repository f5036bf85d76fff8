//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Home page with ROI calculator (`#roi`)
//! - `GET  /book`         - Booking page
//! - `GET  /schedule`     - Redirect to `/book`
//! - `GET  /robots.txt`   - Crawler rules
//! - `GET  /sitemap.xml`  - Sitemap
//! - `GET  /health`       - Health check
//! - `/api/*`             - JSON API (rate limited, JSON 404 for unknown paths)
//! - `/static/*`          - Static assets
//! - anything else        - 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::error_page::not_found_handler;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Page, health and API routes without rate limiting or path normalization.
///
/// Useful for in-process tests, which have no peer address to key the rate
/// limiter on.
pub fn site_router(state: AppState, api_router: Router<AppState>) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .fallback(not_found_handler)
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
///
/// # Errors
///
/// Returns an error if the rate limiter cannot be configured.
pub fn app_router(
    state: AppState,
    static_dir: &str,
    behind_proxy: bool,
) -> Result<NormalizePath<Router>> {
    let api_router = if behind_proxy {
        api::routes::routes().layer(rate_limit::proxied_layer()?)
    } else {
        api::routes::routes().layer(rate_limit::layer()?)
    };

    let router = site_router(state, api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
