//! Error boundary and not-found pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::seo::{PageHead, SeoDefaults};
use crate::state::AppState;

/// Shown when an error carries no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Template for the error boundary.
///
/// Renders `templates/error.html` with the message and a retry link.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub head: PageHead,
    pub message: String,
    pub retry_href: String,
}

/// HTML error response for page handlers.
///
/// The retry action is a plain link to `retry_href`; the page itself never
/// decides how to recover.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: Option<String>,
    pub retry_href: String,
    head: PageHead,
}

impl PageError {
    pub fn new(
        seo: &SeoDefaults,
        status: StatusCode,
        message: Option<String>,
        retry_href: impl Into<String>,
    ) -> Self {
        let retry_href = retry_href.into();
        let head = PageHead::new(seo, &retry_href, Some("Something went wrong"), None).noindex();

        Self {
            status,
            message,
            retry_href,
            head,
        }
    }

    /// Wraps an [`AppError`], keeping its status and message.
    pub fn from_app_error(seo: &SeoDefaults, error: AppError, retry_href: impl Into<String>) -> Self {
        let message = Some(error.message().to_string()).filter(|m| !m.trim().is_empty());
        Self::new(seo, error.status(), message, retry_href)
    }

    /// Message to display, falling back to [`GENERIC_ERROR_MESSAGE`].
    pub fn display_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = ?self.message, "Page error");
        } else {
            tracing::debug!(status = %self.status, message = ?self.message, "Page error");
        }

        let template = ErrorTemplate {
            message: self.display_message().to_string(),
            retry_href: self.retry_href,
            head: self.head,
        };

        (self.status, template).into_response()
    }
}

/// Template for unknown routes.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub head: PageHead,
    pub path: String,
}

/// Fallback handler rendering the 404 page.
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let path = uri.path().to_string();
    let head = PageHead::new(&state.seo, &path, Some("Page not found"), None).noindex();

    (StatusCode::NOT_FOUND, NotFoundTemplate { head, path })
}
