//! Shareable ROI calculator links.
//!
//! A link encodes a [`RoiPreset`] as query parameters so the calculator can
//! be reopened with the same inputs:
//!
//! ```text
//! /?h=10&r=150&w=4&p=5000&pilot=abc#roi
//! ```
//!
//! Keys are always emitted in the order `h, r, w, p`, followed by `pilot`
//! only when a non-empty pilot identifier is given. Every link ends with the
//! `#roi` anchor.

use url::form_urlencoded;

use crate::domain::preset::RoiPreset;
use crate::utils::number_format::format_number;

/// Anchor of the calculator section every link points at.
pub const ROI_ANCHOR: &str = "roi";

/// Path used when [`LinkOptions::pathname`] is not set.
pub const DEFAULT_PATHNAME: &str = "/";

/// Optional parts of a ROI link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Added as `pilot=<id>` when present and non-empty.
    pub pilot_id: Option<String>,
    /// Target path; [`DEFAULT_PATHNAME`] when absent.
    pub pathname: Option<String>,
}

impl LinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pilot_id(mut self, pilot_id: impl Into<String>) -> Self {
        self.pilot_id = Some(pilot_id.into());
        self
    }

    pub fn pathname(mut self, pathname: impl Into<String>) -> Self {
        self.pathname = Some(pathname.into());
        self
    }
}

/// Builds the relative ROI link for a preset.
///
/// The result is `{pathname}?{query}#roi`. Numbers use the standard
/// shortest decimal form ([`format_number`]) and the query is
/// `application/x-www-form-urlencoded` (spaces become `+`).
///
/// No validation happens here: zero, negative and non-finite values are
/// serialized as they are (`NaN`, `Infinity`). Callers that accept user
/// input should run [`RoiPreset::validate`] first.
///
/// # Examples
///
/// ```
/// use pilot_site::domain::{build_roi_href, LinkOptions, RoiPreset};
///
/// let preset = RoiPreset::new(10.0, 150.0, 4.0, 5000.0);
/// let href = build_roi_href(&preset, &LinkOptions::new().pilot_id("abc"));
/// assert_eq!(href, "/?h=10&r=150&w=4&p=5000&pilot=abc#roi");
/// ```
pub fn build_roi_href(preset: &RoiPreset, options: &LinkOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    for (key, value) in preset.fields() {
        query.append_pair(key, &format_number(value));
    }

    if let Some(pilot_id) = options.pilot_id.as_deref().filter(|p| !p.is_empty()) {
        query.append_pair("pilot", pilot_id);
    }

    let pathname = options.pathname.as_deref().unwrap_or(DEFAULT_PATHNAME);

    format!("{pathname}?{}#{ROI_ANCHOR}", query.finish())
}
