// src/fetch/mod.rs
// =============================================================================
// This module downloads pages for the crawler.
//
// The crawler only talks to the PageFetcher trait, never to reqwest directly.
// That way tests can plug in a fake "internet" made of a HashMap, and the
// real program plugs in HttpFetcher.
//
// Submodules:
// - http: The reqwest-based fetcher used by the CLI
// =============================================================================

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::crawl::Origin;

pub use http::HttpFetcher;

/// A successfully downloaded page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw response body
    pub content: Vec<u8>,
    /// Origin of the URL we ended up at after following redirects
    pub origin: Origin,
}

/// Everything that can go wrong while fetching one page.
///
/// The crawler treats all of these the same way (the page has no links),
/// the variants exist for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("too many redirects")]
    TooManyRedirects,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("final URL {0} has no host")]
    NoOrigin(String),
    #[error("{0}")]
    Request(String),
}

// Anything that can turn a URL into page content
//
// #[async_trait] lets us write `async fn` in a trait and still use it
// through generics on stable Rust
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
