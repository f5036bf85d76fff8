//! SEO metadata: site defaults, page heads, canonical URLs and crawler files.
//!
//! # Modules
//!
//! - [`defaults`] - [`SeoDefaults`] built once from [`crate::config::Config`], and [`PageHead`]
//! - [`canonical`] - Canonical URL joining with base-URL fallback
//! - [`sitemap`] - `robots.txt` and `sitemap.xml` rendering

pub mod canonical;
pub mod defaults;
pub mod sitemap;

pub use canonical::canonical_url;
pub use defaults::{PageHead, SeoDefaults};
