// src/extract/mod.rs
// =============================================================================
// This module pulls raw href values out of downloaded pages.
//
// The crawler is handed a LinkExtractor instead of calling scraper itself,
// so tests can describe a whole website as plain text without any HTML.
//
// Submodules:
// - html: Extracts <a href> values with scraper
// =============================================================================

mod html;

pub use html::HtmlLinkExtractor;

/// Produces the raw (unresolved) hrefs referenced by a page.
///
/// Order doesn't matter to the crawler. Content that can't be parsed
/// simply yields no links.
pub trait LinkExtractor: Send + Sync {
    fn extract_links(&self, content: &[u8]) -> Vec<String>;
}

// Any plain function or closure with the right shape is an extractor too
impl<F> LinkExtractor for F
where
    F: Fn(&[u8]) -> Vec<String> + Send + Sync,
{
    fn extract_links(&self, content: &[u8]) -> Vec<String> {
        self(content)
    }
}
