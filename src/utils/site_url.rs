//! Base site URL normalization.
//!
//! The configured `SITE_URL` is the root every canonical and share URL is
//! joined against, so it is normalized once at startup: lowercase host,
//! default port removed, no query or fragment. The site is served from the
//! root of its origin, so the URL may not carry a path.

use url::Url;

/// Errors that can occur during site URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Site URL must include a host")]
    MissingHost,

    #[error("Site URL must not include a path, got '{0}'")]
    UnsupportedPath(String),

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a base site URL to a canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase, must be present
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Query and fragment**: Removed
/// 5. **Path**: Must be empty or `/`; pages, assets and links are all
///    rooted at `/`
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlNormalizationError::MissingHost`] when no host is given.
/// Returns [`UrlNormalizationError::UnsupportedPath`] for sub-path URLs.
///
/// # Examples
///
/// ```
/// use pilot_site::utils::site_url::normalize_site_url;
///
/// let url = normalize_site_url("HTTPS://Example.COM:443").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/");
/// ```
pub fn normalize_site_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let mut url =
        Url::parse(input.trim()).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlNormalizationError::MissingHost)?
        .to_ascii_lowercase();
    url.set_host(Some(&host)).map_err(|_| {
        UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
    })?;

    url.set_query(None);
    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    if url.path() != "/" {
        return Err(UrlNormalizationError::UnsupportedPath(url.path().to_string()));
    }

    Ok(url)
}
