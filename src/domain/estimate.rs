//! ROI estimate shown next to the calculator.

use serde::Serialize;

use crate::domain::preset::RoiPreset;

/// Return on a pilot engagement derived from a [`RoiPreset`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiEstimate {
    /// Value of the automated hours over one week (`hours * rate`).
    pub weekly_value: f64,
    /// Value over the whole pilot (`weekly_value * weeks`).
    pub pilot_value: f64,
    /// `pilot_value - price`.
    pub net_return: f64,
    /// `pilot_value / price`; `None` for free or negatively priced pilots.
    pub roi_multiple: Option<f64>,
    /// `price / weekly_value`; `None` when nothing is saved.
    pub payback_weeks: Option<f64>,
}

impl RoiEstimate {
    pub fn from_preset(preset: &RoiPreset) -> Self {
        let weekly_value = preset.hours * preset.rate;
        let pilot_value = weekly_value * preset.weeks;

        let roi_multiple = (preset.price > 0.0).then(|| pilot_value / preset.price);
        let payback_weeks = (weekly_value > 0.0).then(|| preset.price / weekly_value);

        Self {
            weekly_value,
            pilot_value,
            net_return: pilot_value - preset.price,
            roi_multiple,
            payback_weeks,
        }
    }

    /// True when the pilot returns more than it costs.
    pub fn is_profitable(&self) -> bool {
        self.net_return > 0.0
    }
}
