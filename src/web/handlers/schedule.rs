//! Legacy scheduling path.

use axum::response::Redirect;

/// Destination of the `/schedule` redirect.
pub const SCHEDULE_TARGET: &str = "/book";

/// Redirects the old scheduling page to the booking page.
///
/// # Endpoint
///
/// `GET /schedule` → `307 Temporary Redirect` to `/book`
///
/// The target is fixed; query strings are not forwarded.
pub async fn schedule_handler() -> Redirect {
    tracing::debug!("Redirecting /schedule to {}", SCHEDULE_TARGET);
    Redirect::temporary(SCHEDULE_TARGET)
}
