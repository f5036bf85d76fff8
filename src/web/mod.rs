//! Marketing site pages.
//!
//! Server-rendered HTML using Askama templates from `templates/`. Every page
//! extends `layout.html`, which carries the SEO head, the decorative
//! background and the loading indicator.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`error_page`] - Error boundary and 404 page
//! - [`format`] - Display formatting for amounts
//! - [`routes`] - Page route configuration

pub mod error_page;
pub mod format;
pub mod handlers;
pub mod routes;
