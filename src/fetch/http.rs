// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP(S) with reqwest.
//
// Key functionality:
// - Makes GET requests with a shared client (connection pooling)
// - Follows redirects and reports where we actually ended up
// - Sorts reqwest failures into FetchError variants (timeout, redirect loop, ...)
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - Trait implementations: HttpFetcher implements PageFetcher
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::trace;
use url::Url;

use super::{FetchError, FetchedPage, PageFetcher};
use crate::crawl::Origin;

// How many redirects we follow before giving up on a page
const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches pages with a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates a fetcher with the given per-request timeout
    //
    // We reuse this client for all requests (connection pooling)
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await.map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        // response.url() is the final URL after all redirects
        let final_url = response.url().clone();
        let origin = Origin::from_url(&final_url)
            .ok_or_else(|| FetchError::NoOrigin(final_url.to_string()))?;

        if was_redirected(url, &final_url) {
            trace!(from = url, to = %final_url, "followed redirect");
        }

        let content = response.bytes().await.map_err(categorize_error)?;

        Ok(FetchedPage {
            content: content.to_vec(),
            origin,
        })
    }
}

// Compares parsed URLs, so "http://x.test" and "http://x.test/" count as the same
fn was_redirected(requested: &str, final_url: &Url) -> bool {
    Url::parse(requested).map_or(true, |requested| &requested != final_url)
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure or refused connection
// - Too many redirects
// - etc.
fn categorize_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else {
        FetchError::Request(error.to_string())
    }
}
