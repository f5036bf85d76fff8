//! DTOs for the ROI estimate endpoint.

use serde::Serialize;

use crate::domain::{RoiEstimate, RoiPreset};

/// Estimate together with the preset it was computed from.
#[derive(Debug, Serialize)]
pub struct RoiEstimateResponse {
    pub preset: RoiPreset,
    pub estimate: RoiEstimate,
    pub profitable: bool,
}

impl From<RoiPreset> for RoiEstimateResponse {
    fn from(preset: RoiPreset) -> Self {
        let estimate = RoiEstimate::from_preset(&preset);
        Self {
            preset,
            profitable: estimate.is_profitable(),
            estimate,
        }
    }
}
