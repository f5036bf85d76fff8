#![allow(dead_code)]

use axum::Router;
use chrono::NaiveDate;
use pilot_site::api;
use pilot_site::domain::PilotCatalog;
use pilot_site::routes::site_router;
use pilot_site::seo::SeoDefaults;
use pilot_site::state::AppState;
use url::Url;

pub const SITE_URL: &str = "https://pilots.example.com/";
pub const BOOKING_URL: &str = "https://cal.example.com/pilot-intro";

pub fn test_seo() -> SeoDefaults {
    SeoDefaults {
        site_name: "Pilot Studio".to_string(),
        site_url: Url::parse(SITE_URL).unwrap(),
        default_title: "Pilot Studio | Automation pilots with a clear ROI".to_string(),
        title_template: "%s | Pilot Studio".to_string(),
        description: "Fixed-price automation pilots.".to_string(),
        locale: "en_US".to_string(),
        og_image: "/static/og-image.png".to_string(),
        twitter_handle: Some("@pilotstudio".to_string()),
    }
}

pub fn published_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

pub fn create_test_state() -> AppState {
    AppState::new(
        test_seo(),
        PilotCatalog::default(),
        Some(BOOKING_URL.to_string()),
        published_on(),
    )
}

pub fn create_state_without_booking() -> AppState {
    AppState::new(test_seo(), PilotCatalog::default(), None, published_on())
}

/// Full route table without the rate limiter, which needs a peer address.
pub fn create_test_router(state: AppState) -> Router {
    site_router(state, api::routes::routes())
}
