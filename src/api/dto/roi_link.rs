//! DTOs for the ROI link endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

use crate::domain::{LinkOptions, RoiPreset};

/// Compiled regex for pilot identifiers.
static PILOT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Query for `GET /api/roi-link`.
///
/// Numbers use the short calculator keys; any finite value is accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct RoiLinkQuery {
    pub h: f64,
    pub r: f64,
    pub w: f64,
    pub p: f64,

    /// Optional pilot identifier; an empty value is treated as absent.
    #[validate(length(max = 64))]
    #[validate(regex(path = *PILOT_ID_REGEX))]
    pub pilot: Option<String>,

    /// Optional target path (defaults to `/`).
    #[validate(length(min = 1, max = 256))]
    #[validate(custom(function = "validate_pathname"))]
    pub pathname: Option<String>,
}

impl RoiLinkQuery {
    pub fn preset(&self) -> RoiPreset {
        RoiPreset::new(self.h, self.r, self.w, self.p)
    }

    pub fn options(&self) -> LinkOptions {
        LinkOptions {
            pilot_id: self.pilot.clone(),
            pathname: self.pathname.clone(),
        }
    }

    /// Drops an empty `pilot` so it skips the character check, matching the
    /// builder's rule that an empty identifier is simply omitted.
    pub fn normalized(mut self) -> Self {
        if self.pilot.as_deref() == Some("") {
            self.pilot = None;
        }
        self
    }
}

/// Paths must be site-absolute and carry no query or fragment of their own.
fn validate_pathname(pathname: &str) -> Result<(), ValidationError> {
    if !pathname.starts_with('/') || pathname.starts_with("//") {
        return Err(ValidationError::new("pathname_not_absolute"));
    }
    if pathname.contains(['?', '#']) || pathname.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("pathname_invalid_characters"));
    }
    Ok(())
}

/// Response containing the relative and absolute ROI link.
#[derive(Debug, Serialize)]
pub struct RoiLinkResponse {
    pub href: String,
    pub url: String,
}
