//! `robots.txt` and `sitemap.xml` generation.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::seo::defaults::SeoDefaults;

/// Site paths listed in the sitemap.
pub const INDEXABLE_PATHS: &[&str] = &["/", "/book"];

/// Renders `robots.txt`, allowing every crawler and pointing at the sitemap.
pub fn robots_txt(seo: &SeoDefaults) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        seo.absolute("/sitemap.xml")
    )
}

/// Renders a single-file sitemap for the given paths.
///
/// See <https://www.sitemaps.org/protocol.html>.
pub fn sitemap_xml(seo: &SeoDefaults, paths: &[&str], lastmod: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for path in paths {
        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>\n",
            escape_xml(&seo.absolute(path)),
            lastmod.format("%Y-%m-%d"),
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
