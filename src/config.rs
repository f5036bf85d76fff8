//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export SITE_URL="https://pilots.example.com"
//! export SITE_NAME="Pilot Studio"
//! export BOOKING_URL="https://cal.example.com/pilot-intro"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SITE_URL` - Public origin for canonical and share links, without a path
//!   (default: [`DEFAULT_SITE_URL`])
//! - `SITE_NAME` - Site name used in titles and Open Graph tags
//! - `SITE_DESCRIPTION` - Default meta description
//! - `TWITTER_HANDLE` - Twitter/X handle for card tags, e.g. `@pilotstudio`
//! - `BOOKING_URL` - External scheduler linked from `/book`
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::utils::site_url::normalize_site_url;

/// Base URL used when `SITE_URL` is not set.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

pub const DEFAULT_SITE_NAME: &str = "Pilot Studio";

pub const DEFAULT_SITE_DESCRIPTION: &str =
    "Fixed-price automation pilots with a clear return. Estimate yours before you book.";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Normalized public base URL. Resolved once here; nothing else reads `SITE_URL`.
    pub site_url: Url,
    pub site_name: String,
    pub site_description: String,
    pub twitter_handle: Option<String>,
    pub booking_url: Option<String>,
    pub static_dir: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SITE_URL` is set but cannot be normalized.
    pub fn from_env() -> Result<Self> {
        let site_url = Self::load_site_url().context("Failed to load site URL")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let site_name = env::var("SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string());
        let site_description =
            env::var("SITE_DESCRIPTION").unwrap_or_else(|_| DEFAULT_SITE_DESCRIPTION.to_string());

        let twitter_handle = non_empty_var("TWITTER_HANDLE");
        let booking_url = non_empty_var("BOOKING_URL");

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            site_url,
            site_name,
            site_description,
            twitter_handle,
            booking_url,
            static_dir,
            behind_proxy,
        })
    }

    /// Loads the public base URL.
    ///
    /// Priority:
    /// 1. `SITE_URL` environment variable
    /// 2. [`DEFAULT_SITE_URL`]
    fn load_site_url() -> Result<Url> {
        let raw = non_empty_var("SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        normalize_site_url(&raw).with_context(|| format!("SITE_URL is not a valid URL: '{raw}'"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `site_name` or `site_description` is empty
    /// - `twitter_handle` does not start with `@`
    /// - `booking_url` is not an HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.site_name.trim().is_empty() {
            anyhow::bail!("SITE_NAME must not be empty");
        }

        if self.site_description.trim().is_empty() {
            anyhow::bail!("SITE_DESCRIPTION must not be empty");
        }

        if let Some(ref handle) = self.twitter_handle
            && (!handle.starts_with('@') || handle.len() < 2)
        {
            anyhow::bail!("TWITTER_HANDLE must look like '@name', got '{}'", handle);
        }

        if let Some(ref booking_url) = self.booking_url {
            let parsed = Url::parse(booking_url)
                .with_context(|| format!("BOOKING_URL is not a valid URL: '{booking_url}'"))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!(
                    "BOOKING_URL must start with 'http://' or 'https://', got '{}'",
                    booking_url
                );
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Site URL: {}", self.site_url);
        tracing::info!("  Site name: {}", self.site_name);

        match self.booking_url {
            Some(ref url) => tracing::info!("  Booking URL: {}", url),
            None => tracing::info!("  Booking URL: not configured"),
        }

        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a variable, treating blank values as unset.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
