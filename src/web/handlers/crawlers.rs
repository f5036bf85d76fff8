//! `robots.txt` and `sitemap.xml` handlers.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::seo::sitemap::{INDEXABLE_PATHS, robots_txt, sitemap_xml};
use crate::state::AppState;

/// `GET /robots.txt`
pub async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.seo),
    )
}

/// `GET /sitemap.xml`
///
/// Lists the indexable pages with the startup date as `<lastmod>`.
pub async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap_xml(&state.seo, INDEXABLE_PATHS, state.published_on),
    )
}
