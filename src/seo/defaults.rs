//! Site-wide SEO defaults and the per-page head built from them.

use anyhow::{Result, ensure};
use url::Url;

use crate::config::Config;
use crate::seo::canonical::canonical_url;

/// Placeholder replaced by the page title in [`SeoDefaults::title_template`].
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Immutable SEO configuration, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoDefaults {
    pub site_name: String,
    /// Normalized base URL, always ending in `/`.
    pub site_url: Url,
    /// Title for pages that don't set their own.
    pub default_title: String,
    /// Template applied to page titles; contains [`TITLE_PLACEHOLDER`].
    pub title_template: String,
    pub description: String,
    pub locale: String,
    /// Site-relative path of the Open Graph image.
    pub og_image: String,
    pub twitter_handle: Option<String>,
}

impl SeoDefaults {
    /// Builds the defaults from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the site name is empty.
    pub fn from_config(config: &Config) -> Result<Self> {
        let site_name = config.site_name.trim().to_string();
        ensure!(!site_name.is_empty(), "site name must not be empty");

        Ok(Self {
            default_title: format!("{site_name} | Automation pilots with a clear ROI"),
            title_template: format!("{TITLE_PLACEHOLDER} | {site_name}"),
            site_name,
            site_url: config.site_url.clone(),
            description: config.site_description.clone(),
            locale: "en_US".to_string(),
            og_image: "/static/og-image.png".to_string(),
            twitter_handle: config.twitter_handle.clone(),
        })
    }

    /// Applies the title template to a page title.
    pub fn format_title(&self, title: &str) -> String {
        self.title_template.replace(TITLE_PLACEHOLDER, title)
    }

    /// Absolute URL for a site path, with canonical fallback rules.
    pub fn absolute(&self, path: &str) -> String {
        canonical_url(&self.site_url, path)
    }
}

/// Metadata rendered into a page's `<head>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHead {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub site_name: String,
    pub locale: String,
    pub og_image: String,
    /// Empty when no handle is configured.
    pub twitter_handle: String,
    pub noindex: bool,
}

impl PageHead {
    pub fn new(
        seo: &SeoDefaults,
        path: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            title: title
                .map(|t| seo.format_title(t))
                .unwrap_or_else(|| seo.default_title.clone()),
            description: description.unwrap_or(&seo.description).to_string(),
            canonical: seo.absolute(path),
            site_name: seo.site_name.clone(),
            locale: seo.locale.clone(),
            og_image: seo.absolute(&seo.og_image),
            twitter_handle: seo.twitter_handle.clone().unwrap_or_default(),
            noindex: false,
        }
    }

    /// Marks the page as excluded from search indexes.
    pub fn noindex(mut self) -> Self {
        self.noindex = true;
        self
    }

    /// Value of the `robots` meta tag.
    pub fn robots(&self) -> &'static str {
        if self.noindex {
            "noindex, nofollow"
        } else {
            "index, follow"
        }
    }
}
