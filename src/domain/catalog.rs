//! Pilot offers listed on the home page.

use serde::Serialize;

use crate::domain::preset::RoiPreset;

/// A fixed-price pilot with the preset its ROI link opens with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotOffer {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub preset: RoiPreset,
}

/// Ordered, immutable list of pilot offers.
#[derive(Debug, Clone, PartialEq)]
pub struct PilotCatalog {
    offers: Vec<PilotOffer>,
}

impl PilotCatalog {
    pub fn new(offers: Vec<PilotOffer>) -> Self {
        Self { offers }
    }

    pub fn offers(&self) -> &[PilotOffer] {
        &self.offers
    }

    pub fn find(&self, id: &str) -> Option<&PilotOffer> {
        self.offers.iter().find(|offer| offer.id == id)
    }

    /// Preset the calculator starts from when no query is given.
    ///
    /// Falls back to the starter numbers for an empty catalog.
    pub fn default_preset(&self) -> RoiPreset {
        self.offers
            .first()
            .map(|offer| offer.preset)
            .unwrap_or(STARTER_PRESET)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

const STARTER_PRESET: RoiPreset = RoiPreset::new(10.0, 150.0, 4.0, 5000.0);

impl Default for PilotCatalog {
    fn default() -> Self {
        Self::new(vec![
            PilotOffer {
                id: "starter",
                name: "Starter pilot",
                summary: "One workflow automated end to end in four weeks.",
                preset: STARTER_PRESET,
            },
            PilotOffer {
                id: "growth",
                name: "Growth pilot",
                summary: "Three connected workflows with reporting over eight weeks.",
                preset: RoiPreset::new(25.0, 120.0, 8.0, 14_000.0),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = PilotCatalog::default();
        let ids: Vec<&str> = catalog.offers().iter().map(|o| o.id).collect();
        assert_eq!(ids, ["starter", "growth"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_find_offer() {
        let catalog = PilotCatalog::default();
        assert_eq!(catalog.find("growth").map(|o| o.preset.weeks), Some(8.0));
        assert!(catalog.find("enterprise").is_none());
    }

    #[test]
    fn test_default_preset_is_first_offer() {
        let catalog = PilotCatalog::default();
        assert_eq!(catalog.default_preset(), catalog.offers()[0].preset);
    }

    #[test]
    fn test_empty_catalog_falls_back_to_starter_numbers() {
        let catalog = PilotCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.default_preset(), STARTER_PRESET);
    }
}
