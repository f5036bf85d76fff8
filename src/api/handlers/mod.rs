//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod estimate;
pub mod health;
pub mod not_found;
pub mod roi_link;

pub use estimate::roi_estimate_handler;
pub use health::health_handler;
pub use not_found::api_not_found_handler;
pub use roi_link::roi_link_handler;
