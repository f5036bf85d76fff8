//! ROI link service.

use serde::Serialize;
use url::Url;

use crate::domain::{LinkOptions, PilotCatalog, PilotOffer, RoiEstimate, RoiPreset, build_roi_href};
use crate::seo::canonical_url;

/// A pilot offer paired with its calculator link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferLink {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub href: String,
    pub preset: RoiPreset,
    pub estimate: RoiEstimate,
}

/// Service for building ROI calculator links.
///
/// Holds the public site URL so relative hrefs can be turned into absolute
/// share URLs, and the pilot catalog the home page lists.
pub struct RoiService {
    site_url: Url,
    catalog: PilotCatalog,
}

impl RoiService {
    /// Creates a new ROI service.
    ///
    /// `site_url` is expected to be normalized (see
    /// [`crate::utils::site_url::normalize_site_url`]).
    pub fn new(site_url: Url, catalog: PilotCatalog) -> Self {
        Self { site_url, catalog }
    }

    pub fn catalog(&self) -> &PilotCatalog {
        &self.catalog
    }

    /// Relative calculator link, e.g. `/?h=10&r=150&w=4&p=5000#roi`.
    pub fn href(&self, preset: &RoiPreset, options: &LinkOptions) -> String {
        let href = build_roi_href(preset, options);
        tracing::debug!(%href, "Built ROI link");
        href
    }

    /// Absolute calculator link on the public site.
    pub fn share_url(&self, preset: &RoiPreset, options: &LinkOptions) -> String {
        canonical_url(&self.site_url, &self.href(preset, options))
    }

    /// One calculator link per catalog offer, tagged with the offer id.
    pub fn offer_links(&self) -> Vec<OfferLink> {
        self.catalog
            .offers()
            .iter()
            .map(|offer| OfferLink {
                id: offer.id,
                name: offer.name,
                summary: offer.summary,
                href: build_roi_href(&offer.preset, &LinkOptions::new().pilot_id(offer.id)),
                preset: offer.preset,
                estimate: RoiEstimate::from_preset(&offer.preset),
            })
            .collect()
    }

    pub fn find_offer(&self, id: &str) -> Option<&PilotOffer> {
        self.catalog.find(id)
    }
}
