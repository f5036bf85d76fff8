//! Home page handler with the ROI calculator.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::application::services::OfferLink;
use crate::domain::{LinkOptions, RoiEstimate, RoiPreset, RoiQuery};
use crate::seo::PageHead;
use crate::state::AppState;
use crate::utils::number_format::format_number;
use crate::web::error_page::PageError;
use crate::web::format::{money, one_decimal};

/// Where the error boundary sends the visitor to start over.
const CALCULATOR_RESET_HREF: &str = "/#roi";

/// Pilot offer card.
pub struct OfferCard {
    pub name: String,
    pub summary: String,
    pub href: String,
    pub price: String,
    pub pilot_value: String,
}

impl From<OfferLink> for OfferCard {
    fn from(link: OfferLink) -> Self {
        Self {
            name: link.name.to_string(),
            summary: link.summary.to_string(),
            price: money(link.preset.price),
            href: link.href,
            pilot_value: money(link.estimate.pilot_value),
        }
    }
}

/// Calculator section state: form values, estimate readout and share link.
pub struct Calculator {
    pub hours: String,
    pub rate: String,
    pub weeks: String,
    pub price: String,
    pub pilot: String,
    /// Name of the catalog offer the pilot id refers to, or empty.
    pub offer_name: String,
    pub weekly_value: String,
    pub pilot_value: String,
    pub net_return: String,
    pub roi_multiple: String,
    pub payback_weeks: String,
    pub profitable: bool,
    pub share_url: String,
}

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - Pilot offer cards, each linking into the calculator
/// - The `#roi` calculator prefilled from the query string
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub head: PageHead,
    pub offers: Vec<OfferCard>,
    pub calculator: Calculator,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /[?h=..&r=..&w=..&p=..[&pilot=..]]`
///
/// Without numbers in the query the calculator shows the preset of the offer
/// named by `pilot`, or the first offer's preset. With numbers, it shows the
/// given preset. Either way it links to the preset it shows.
///
/// # Errors
///
/// Renders the error boundary with 400 Bad Request if the query is present
/// but incomplete or contains an invalid number. Retry returns to `/#roi`.
pub async fn home_handler(
    State(state): State<AppState>,
    query: Result<Query<RoiQuery>, QueryRejection>,
) -> Result<impl IntoResponse, PageError> {
    let Query(query) = query.map_err(|e| {
        PageError::new(
            &state.seo,
            StatusCode::BAD_REQUEST,
            Some(e.body_text()),
            CALCULATOR_RESET_HREF,
        )
    })?;

    let preset = if query.is_empty() {
        query
            .pilot_id()
            .and_then(|id| state.roi_service.find_offer(id))
            .map(|offer| offer.preset)
            .unwrap_or_else(|| state.roi_service.catalog().default_preset())
    } else {
        RoiPreset::from_query(&query).map_err(|e| {
            tracing::debug!("Invalid calculator query: {}", e);
            PageError::from_app_error(&state.seo, e.into(), CALCULATOR_RESET_HREF)
        })?
    };

    let pilot = query.pilot_id().unwrap_or_default().to_string();
    let options = LinkOptions {
        pilot_id: Some(pilot.clone()),
        pathname: None,
    };

    let offer_name = state
        .roi_service
        .find_offer(&pilot)
        .map(|offer| offer.name.to_string())
        .unwrap_or_default();

    let estimate = RoiEstimate::from_preset(&preset);

    let calculator = Calculator {
        hours: format_number(preset.hours),
        rate: format_number(preset.rate),
        weeks: format_number(preset.weeks),
        price: format_number(preset.price),
        pilot,
        offer_name,
        weekly_value: money(estimate.weekly_value),
        pilot_value: money(estimate.pilot_value),
        net_return: money(estimate.net_return),
        roi_multiple: estimate
            .roi_multiple
            .map(|m| format!("{}×", one_decimal(m)))
            .unwrap_or_else(|| "—".to_string()),
        payback_weeks: estimate
            .payback_weeks
            .map(one_decimal)
            .unwrap_or_else(|| "—".to_string()),
        profitable: estimate.is_profitable(),
        share_url: state.roi_service.share_url(&preset, &options),
    };

    let offers = state
        .roi_service
        .offer_links()
        .into_iter()
        .map(OfferCard::from)
        .collect();

    Ok(HomeTemplate {
        head: PageHead::new(&state.seo, "/", None, None),
        offers,
        calculator,
    })
}
