//! ROI calculator preset and its query-string form.

use serde::{Deserialize, Serialize};

/// Errors raised when a preset is read from untrusted input.
///
/// The link builder itself never raises these; they exist for the HTTP
/// boundary where calculator inputs arrive as query strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoiError {
    #[error("Missing value for '{field}'")]
    Missing { field: &'static str },

    #[error("Invalid number for '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Value for '{field}' must be a finite number")]
    NonFinite { field: &'static str },
}

impl RoiError {
    /// Query key the error refers to (`h`, `r`, `w` or `p`).
    pub fn field(&self) -> &'static str {
        match self {
            RoiError::Missing { field }
            | RoiError::InvalidNumber { field, .. }
            | RoiError::NonFinite { field } => field,
        }
    }
}

/// Four numbers describing an ROI scenario for a pilot engagement.
///
/// Ranges are not enforced: zero and negative values are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiPreset {
    /// Hours of work automated per week.
    pub hours: f64,
    /// Hourly billing rate.
    pub rate: f64,
    /// Pilot duration in weeks.
    pub weeks: f64,
    /// Pilot price.
    pub price: f64,
}

impl RoiPreset {
    pub const fn new(hours: f64, rate: f64, weeks: f64, price: f64) -> Self {
        Self {
            hours,
            rate,
            weeks,
            price,
        }
    }

    /// Fields paired with their short query keys, in serialization order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("h", self.hours),
            ("r", self.rate),
            ("w", self.weeks),
            ("p", self.price),
        ]
    }

    /// Rejects NaN and infinite fields.
    ///
    /// # Errors
    ///
    /// Returns [`RoiError::NonFinite`] naming the first offending key.
    pub fn validate(&self) -> Result<(), RoiError> {
        match self.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, _)) => Err(RoiError::NonFinite { field }),
            None => Ok(()),
        }
    }

    /// Parses a preset from raw calculator query values.
    ///
    /// # Errors
    ///
    /// - [`RoiError::Missing`] if any of `h`, `r`, `w`, `p` is absent or blank
    /// - [`RoiError::InvalidNumber`] if a value does not parse as a number
    /// - [`RoiError::NonFinite`] if a value parses to NaN or infinity
    pub fn from_query(query: &RoiQuery) -> Result<Self, RoiError> {
        let preset = Self {
            hours: parse_field("h", query.h.as_deref())?,
            rate: parse_field("r", query.r.as_deref())?,
            weeks: parse_field("w", query.w.as_deref())?,
            price: parse_field("p", query.p.as_deref())?,
        };
        preset.validate()?;
        Ok(preset)
    }
}

fn parse_field(field: &'static str, raw: Option<&str>) -> Result<f64, RoiError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(RoiError::Missing { field })?;

    raw.parse::<f64>().map_err(|_| RoiError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Raw calculator query (`?h=..&r=..&w=..&p=..&pilot=..`).
///
/// Values are kept as strings so a bad number produces a field-specific
/// error instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoiQuery {
    pub h: Option<String>,
    pub r: Option<String>,
    pub w: Option<String>,
    pub p: Option<String>,
    pub pilot: Option<String>,
}

impl RoiQuery {
    /// True when no preset value was supplied at all.
    pub fn is_empty(&self) -> bool {
        [&self.h, &self.r, &self.w, &self.p]
            .iter()
            .all(|v| v.as_deref().is_none_or(|s| s.trim().is_empty()))
    }

    /// Pilot identifier, if present and non-empty.
    pub fn pilot_id(&self) -> Option<&str> {
        self.pilot.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(h: &str, r: &str, w: &str, p: &str) -> RoiQuery {
        RoiQuery {
            h: Some(h.to_string()),
            r: Some(r.to_string()),
            w: Some(w.to_string()),
            p: Some(p.to_string()),
            pilot: None,
        }
    }

    #[test]
    fn test_from_query_parses_all_fields() {
        let preset = RoiPreset::from_query(&query("10", "150", "4", "5000")).unwrap();
        assert_eq!(preset, RoiPreset::new(10.0, 150.0, 4.0, 5000.0));
    }

    #[test]
    fn test_from_query_accepts_fractions_and_whitespace() {
        let preset = RoiPreset::from_query(&query(" 2.5 ", "100", "1", "0")).unwrap();
        assert_eq!(preset.hours, 2.5);
        assert_eq!(preset.price, 0.0);
    }

    #[test]
    fn test_from_query_keeps_negative_values() {
        let preset = RoiPreset::from_query(&query("-1", "100", "1", "-50")).unwrap();
        assert_eq!(preset.hours, -1.0);
        assert_eq!(preset.price, -50.0);
    }

    #[test]
    fn test_from_query_missing_field() {
        let mut q = query("10", "150", "4", "5000");
        q.w = None;
        assert_eq!(
            RoiPreset::from_query(&q),
            Err(RoiError::Missing { field: "w" })
        );
    }

    #[test]
    fn test_from_query_blank_counts_as_missing() {
        let q = query("10", "  ", "4", "5000");
        assert_eq!(
            RoiPreset::from_query(&q),
            Err(RoiError::Missing { field: "r" })
        );
    }

    #[test]
    fn test_from_query_invalid_number() {
        let err = RoiPreset::from_query(&query("ten", "150", "4", "5000")).unwrap_err();
        assert_eq!(
            err,
            RoiError::InvalidNumber {
                field: "h",
                value: "ten".to_string()
            }
        );
        assert_eq!(err.field(), "h");
    }

    #[test]
    fn test_from_query_rejects_nan_and_infinity() {
        assert_eq!(
            RoiPreset::from_query(&query("10", "NaN", "4", "5000")),
            Err(RoiError::NonFinite { field: "r" })
        );
        assert_eq!(
            RoiPreset::from_query(&query("10", "150", "4", "inf")),
            Err(RoiError::NonFinite { field: "p" })
        );
    }

    #[test]
    fn test_validate_accepts_zero_and_negative() {
        assert!(RoiPreset::new(0.0, -1.0, 0.0, -100.0).validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_non_finite_field() {
        let preset = RoiPreset::new(1.0, f64::NAN, f64::INFINITY, 1.0);
        assert_eq!(preset.validate(), Err(RoiError::NonFinite { field: "r" }));
    }

    #[test]
    fn test_query_is_empty() {
        assert!(RoiQuery::default().is_empty());

        let blank = RoiQuery {
            h: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.is_empty());

        let partial = RoiQuery {
            p: Some("100".to_string()),
            ..Default::default()
        };
        assert!(!partial.is_empty());
    }

    #[test]
    fn test_pilot_id_ignores_empty_string() {
        let mut q = RoiQuery::default();
        assert_eq!(q.pilot_id(), None);

        q.pilot = Some(String::new());
        assert_eq!(q.pilot_id(), None);

        q.pilot = Some("starter".to_string());
        assert_eq!(q.pilot_id(), Some("starter"));
    }
}
