//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    book_handler, home_handler, robots_handler, schedule_handler, sitemap_handler,
};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /`            - Home page with the `#roi` calculator
/// - `GET /book`        - Booking page
/// - `GET /schedule`    - Redirect to `/book`
/// - `GET /robots.txt`  - Crawler rules
/// - `GET /sitemap.xml` - Sitemap of indexable pages
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/book", get(book_handler))
        .route("/schedule", get(schedule_handler))
        .route("/robots.txt", get(robots_handler))
        .route("/sitemap.xml", get(sitemap_handler))
}
