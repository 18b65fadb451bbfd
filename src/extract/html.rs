// src/extract/html.rs
// =============================================================================
// This module extracts href values from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so broken markup
//   still parses into *something*
//
// Unlike a browser we don't resolve anything here. The href comes back
// exactly as written ("/docs", "https://...", "mailto:..."), and the crawler
// decides what to keep based on the page's origin.
// =============================================================================

use scraper::{Html, Selector};

use super::LinkExtractor;

/// Finds every `<a href="...">` in an HTML document.
#[derive(Debug, Clone)]
pub struct HtmlLinkExtractor {
    selector: Selector,
}

impl HtmlLinkExtractor {
    pub fn new() -> Self {
        // Selector::parse only fails on invalid CSS, and "a[href]" is a
        // constant we know is valid
        let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");
        Self { selector }
    }
}

impl Default for HtmlLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, content: &[u8]) -> Vec<String> {
        // Pages aren't always valid UTF-8; replace bad bytes instead of failing
        let html = String::from_utf8_lossy(content);
        let document = Html::parse_document(&html);

        document
            .select(&self.selector)
            .filter_map(|element| element.value().attr("href"))
            .map(|href| href.trim().to_string())
            .collect()
    }
}
