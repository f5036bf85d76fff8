//! # Pilot Site
//!
//! Marketing site for fixed-price automation pilots, built with Axum and Askama.
//!
//! The core is the ROI link builder ([`domain::build_roi_href`]): it turns a
//! calculator preset into a shareable link such as
//! `/?h=10&r=150&w=4&p=5000&pilot=starter#roi`. Everything else is the site
//! around it.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Presets, link builder, estimates, pilot catalog
//! - **Application Layer** ([`application`]) - Share URLs and offer links
//! - **SEO** ([`seo`]) - Site defaults, page heads, canonical URLs, crawler files
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages and the error boundary
//!
//! ## Quick Start
//!
//! ```bash
//! export SITE_URL="https://pilots.example.com"
//! cargo run
//!
//! # Print a link from the command line
//! cargo run --bin roi-link -- build --hours 10 --rate 150 --weeks 4 --price 5000 --pilot starter
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod seo;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RoiService;
    pub use crate::domain::{
        LinkOptions, PilotCatalog, RoiEstimate, RoiPreset, RoiQuery, build_roi_href,
    };
    pub use crate::error::AppError;
    pub use crate::seo::{PageHead, SeoDefaults, canonical_url};
    pub use crate::state::AppState;
}
