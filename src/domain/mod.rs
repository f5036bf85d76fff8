//! Core calculator model and link building.
//!
//! Everything here is pure and synchronous: no I/O, no shared state.
//!
//! # Modules
//!
//! - [`preset`] - ROI preset, its raw query form and validation errors
//! - [`roi_link`] - Shareable ROI link builder
//! - [`estimate`] - ROI figures derived from a preset
//! - [`catalog`] - Pilot offers and their default presets

pub mod catalog;
pub mod estimate;
pub mod preset;
pub mod roi_link;

pub use catalog::{PilotCatalog, PilotOffer};
pub use estimate::RoiEstimate;
pub use preset::{RoiError, RoiPreset, RoiQuery};
pub use roi_link::{LinkOptions, build_roi_href};
