//! Utility functions for number formatting and URL handling.
//!
//! - [`number_format`] - Standard number-to-string conversion for query values
//! - [`site_url`] - Base site URL normalization

pub mod number_format;
pub mod site_url;
