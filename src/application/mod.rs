//! Application layer services.
//!
//! Services combine the pure domain functions with startup configuration
//! (public site URL, pilot catalog) and give HTTP handlers a single entry point.
//!
//! # Available Services
//!
//! - [`services::roi_service::RoiService`] - ROI links, share URLs and offer links

pub mod services;
