// src/sitemap/mod.rs
// =============================================================================
// This module turns the set of crawled pages into a sitemap document.
//
// Output formats:
// - xml: The standard <urlset> sitemap (see https://www.sitemaps.org)
// - json: The same data for scripts that would rather not parse XML
//
// The crawler hands us an unordered HashSet, so we sort the URLs here.
// That way running the tool twice on the same site prints the same bytes.
// =============================================================================

mod xml;

use serde::Serialize;
use thiserror::Error;

/// Namespace every sitemap <urlset> declares.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Errors that can happen while writing the document.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to write XML: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("sitemap is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A sorted list of page URLs, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sitemap {
    xmlns: &'static str,
    urls: Vec<String>,
}

impl Sitemap {
    // Builds a sitemap from any collection of URLs (sorted, duplicates removed)
    pub fn from_urls<I>(urls: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut urls: Vec<String> = urls.into_iter().collect();
        urls.sort();
        urls.dedup();

        Self {
            xmlns: SITEMAP_NAMESPACE,
            urls,
        }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn to_xml(&self) -> Result<String, SitemapError> {
        xml::write_urlset(&self.urls)
    }

    pub fn to_json(&self) -> Result<String, SitemapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
