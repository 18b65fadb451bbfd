// src/crawl/origin.rs
// =============================================================================
// This module defines the "origin" of a page: its scheme + host.
//
// The crawler never leaves the origin of the page it is currently looking at.
// We compute the origin from the URL the server actually answered from (after
// redirects), so "http://example.com" redirecting to "https://www.example.com"
// moves the boundary to "https://www.example.com".
//
// Rust concepts:
// - Newtype pattern: wrapping a String so it can't be mixed up with a URL
// - Option<T>: For links we decide to drop
// =============================================================================

use std::fmt;
use url::Url;

/// The normalized `scheme://host[:port]` of a page; links outside it are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    // Builds the origin from a parsed URL
    //
    // Returns None for URLs without a host (mailto:, data:, file:///...)
    //
    // The port is only kept when it isn't the default for the scheme,
    // because Url::port() already hides default ports for us.
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        let origin = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };
        Some(Origin(origin))
    }

    // Parses a URL string and builds its origin
    #[cfg(test)]
    pub fn parse(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        Origin::from_url(&url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Turns a raw href into an absolute URL, or drops it
    //
    // Examples (origin = "https://example.com"):
    //   "/docs"               -> Some("https://example.com/docs")
    //   "https://other.com/x" -> Some("https://other.com/x")
    //   "about.html"          -> None (relative without a leading slash)
    //   "mailto:a@b.c"        -> None
    pub fn resolve(&self, href: &str) -> Option<String> {
        if href.starts_with('/') {
            Some(format!("{}{}", self.as_str(), href))
        } else if href.starts_with("http://") || href.starts_with("https://") {
            Some(href.to_string())
        } else {
            None
        }
    }

    // Checks whether an absolute URL belongs to this origin
    //
    // The link is parsed so its scheme, host and port get the same
    // normalization as the origin itself ("https://Example.com:443/a" is
    // inside "https://example.com"). The link string itself is kept as is.
    // Comparing whole origins also means "http://x.test" doesn't accept
    // "http://x.test.evil.com/" or "http://x.test:81/".
    pub fn contains(&self, link: &str) -> bool {
        Url::parse(link)
            .ok()
            .and_then(|url| Origin::from_url(&url))
            .is_some_and(|origin| origin == *self)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_from_url() {
        let url = Url::parse("https://example.com/docs/page?x=1").unwrap();
        let origin = Origin::from_url(&url).unwrap();
        assert_eq!(origin.as_str(), "https://example.com");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        let origin = Origin::parse("http://127.0.0.1:8080/index.html").unwrap();
        assert_eq!(origin.as_str(), "http://127.0.0.1:8080");

        // Default ports are dropped by the url crate
        let origin = Origin::parse("https://example.com:443/").unwrap();
        assert_eq!(origin.as_str(), "https://example.com");
    }

    #[test]
    fn test_origin_without_host() {
        assert_eq!(Origin::parse("mailto:test@example.com"), None);
        assert_eq!(Origin::parse("not a url"), None);
    }

    #[test]
    fn test_resolve_root_relative() {
        let origin = Origin::parse("https://example.com").unwrap();
        assert_eq!(
            origin.resolve("/docs"),
            Some("https://example.com/docs".to_string())
        );
    }

    #[test]
    fn test_resolve_absolute_is_unchanged() {
        let origin = Origin::parse("https://example.com").unwrap();
        assert_eq!(
            origin.resolve("http://other.com/b"),
            Some("http://other.com/b".to_string())
        );
    }

    #[test]
    fn test_resolve_drops_everything_else() {
        let origin = Origin::parse("https://example.com").unwrap();
        assert_eq!(origin.resolve("about.html"), None);
        assert_eq!(origin.resolve("#section"), None);
        assert_eq!(origin.resolve("mailto:test@example.com"), None);
        assert_eq!(origin.resolve("javascript:void(0)"), None);
        assert_eq!(origin.resolve(""), None);
    }

    #[test]
    fn test_contains_same_origin() {
        let origin = Origin::parse("http://x.test/").unwrap();
        assert!(origin.contains("http://x.test"));
        assert!(origin.contains("http://x.test/a"));
        assert!(origin.contains("http://x.test?q=1"));
        assert!(origin.contains("http://x.test#top"));
    }

    #[test]
    fn test_contains_rejects_other_origins() {
        let origin = Origin::parse("http://x.test/").unwrap();
        assert!(!origin.contains("http://other.test/b"));
        assert!(!origin.contains("https://x.test/a"));
        assert!(!origin.contains("http://x.test.evil.com/"));
        assert!(!origin.contains("http://x.test:8080/"));
    }

    #[test]
    fn test_contains_ignores_host_case_and_default_port() {
        let origin = Origin::parse("https://Example.com/").unwrap();
        assert_eq!(origin.as_str(), "https://example.com");
        assert!(origin.contains("https://Example.com/a"));
        assert!(origin.contains("https://EXAMPLE.COM"));

        let origin = Origin::parse("https://x.test:443/").unwrap();
        assert!(origin.contains("https://x.test:443/a"));
        assert!(origin.contains("https://x.test/a"));
        assert!(!origin.contains("http://x.test:443/a"));
    }

    #[test]
    fn test_contains_rejects_unparseable_links() {
        let origin = Origin::parse("http://x.test/").unwrap();
        assert!(!origin.contains("http://"));
        assert!(!origin.contains("http://x.test:99999/"));
    }
}
