//! Booking page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::seo::PageHead;
use crate::state::AppState;

/// Template for the booking page.
///
/// Renders `templates/book.html` with a link to the external scheduler when
/// `BOOKING_URL` is configured, or a contact fallback otherwise.
#[derive(Template, WebTemplate)]
#[template(path = "book.html")]
pub struct BookTemplate {
    pub head: PageHead,
    /// Empty when no scheduler is configured.
    pub booking_url: String,
}

/// Renders the booking page.
///
/// # Endpoint
///
/// `GET /book`
pub async fn book_handler(State(state): State<AppState>) -> impl IntoResponse {
    BookTemplate {
        head: PageHead::new(
            &state.seo,
            "/book",
            Some("Book a pilot call"),
            Some("Pick a time for a 30-minute call to scope your automation pilot."),
        ),
        booking_url: state.booking_url.as_deref().unwrap_or_default().to_string(),
    }
}
