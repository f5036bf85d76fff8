//! Shared application state.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use crate::application::services::RoiService;
use crate::config::Config;
use crate::domain::PilotCatalog;
use crate::seo::SeoDefaults;

/// State injected into every handler.
///
/// Built once at startup and never mutated; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub seo: Arc<SeoDefaults>,
    pub roi_service: Arc<RoiService>,
    pub booking_url: Option<Arc<str>>,
    /// Reported as `<lastmod>` in the sitemap.
    pub published_on: NaiveDate,
}

impl AppState {
    pub fn new(
        seo: SeoDefaults,
        catalog: PilotCatalog,
        booking_url: Option<String>,
        published_on: NaiveDate,
    ) -> Self {
        let roi_service = RoiService::new(seo.site_url.clone(), catalog);

        Self {
            seo: Arc::new(seo),
            roi_service: Arc::new(roi_service),
            booking_url: booking_url.map(Arc::from),
            published_on,
        }
    }

    /// Builds state from validated configuration with the default pilot catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the SEO defaults cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let seo = SeoDefaults::from_config(config)?;

        Ok(Self::new(
            seo,
            PilotCatalog::default(),
            config.booking_url.clone(),
            Utc::now().date_naive(),
        ))
    }
}
