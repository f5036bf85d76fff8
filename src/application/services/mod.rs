//! Business logic services for the application layer.

pub mod roi_service;

pub use roi_service::{OfferLink, RoiService};
