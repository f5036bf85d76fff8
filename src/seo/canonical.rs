//! Canonical URL construction.

use url::Url;

/// Joins the site base URL with a path.
///
/// Falls back to the bare base URL when the path is malformed or would leave
/// the base origin (`//other.host/x`, `https://other.host`). Never fails.
///
/// # Examples
///
/// ```
/// use pilot_site::seo::canonical_url;
/// use url::Url;
///
/// let base = Url::parse("https://pilots.example.com/").unwrap();
/// assert_eq!(canonical_url(&base, "/book"), "https://pilots.example.com/book");
/// assert_eq!(canonical_url(&base, "//evil.example"), "https://pilots.example.com/");
/// ```
pub fn canonical_url(base: &Url, path: &str) -> String {
    match base.join(path) {
        Ok(joined) if joined.origin() == base.origin() => joined.to_string(),
        Ok(joined) => {
            tracing::debug!(%base, %joined, "Canonical path left site origin, using base URL");
            base.to_string()
        }
        Err(e) => {
            tracing::debug!(%base, path, error = %e, "Malformed canonical path, using base URL");
            base.to_string()
        }
    }
}
