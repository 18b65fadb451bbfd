// src/crawl/traverse.rs
// =============================================================================
// This module implements website crawling with a level-by-level
// breadth-first approach.
//
// How it works:
// 1. The first "frontier" (set of pages to expand) holds just the seed URL
// 2. For each page in the frontier: mark it visited, fetch it, extract links
// 3. Keep only links on the same origin as the page we actually landed on
// 4. Links we haven't visited yet become the next frontier
// 5. Repeat until the frontier is empty or we've expanded max_depth + 1 levels
//
// Depth:
// - max_depth = 0: fetch the seed only
// - max_depth = 1: seed + every page it links to
// - etc.
//
// The result is every page we *tried* to fetch. A page that failed to load
// is still in the result, it just didn't contribute any links.
//
// Rust concepts:
// - Generics: Crawler<F, E> works with any fetcher and any extractor
// - HashSet: To track visited URLs and frontiers (O(1) lookup)
// - Streams: buffer_unordered() to fetch several pages of a level at once
// =============================================================================

use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use tracing::{debug, info};

use super::Origin;
use crate::extract::LinkExtractor;
use crate::fetch::PageFetcher;

/// Breadth-first, same-origin crawler.
pub struct Crawler<F, E> {
    fetcher: F,
    extractor: E,
    concurrency: usize,
}

impl<F, E> Crawler<F, E>
where
    F: PageFetcher,
    E: LinkExtractor,
{
    // Creates a crawler that fetches one page at a time
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self {
            fetcher,
            extractor,
            concurrency: 1,
        }
    }

    // How many pages of the same level may be in flight at once
    //
    // Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    // Crawls from `seed`, expanding at most `max_depth + 1` levels
    //
    // Parameters:
    //   seed: absolute URL to start from
    //   max_depth: number of hops to follow from the seed
    //
    // Returns: every URL that was expanded, seed included
    pub async fn traverse(&self, seed: &str, max_depth: usize) -> HashSet<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut next: HashSet<String> = HashSet::from([seed.to_string()]);

        for level in 0..=max_depth {
            if next.is_empty() {
                debug!(level, "frontier is empty, stopping early");
                break;
            }

            let current = std::mem::take(&mut next);

            // Check-and-mark happens here, on this task, before anything is
            // fetched, so no URL can be dispatched twice
            let claimed: Vec<String> = current
                .into_iter()
                .filter(|url| visited.insert(url.clone()))
                .collect();

            debug!(level, pages = claimed.len(), "expanding level");

            // Level barrier: collect() waits for every fetch of this level
            let outbound: Vec<Vec<String>> = stream::iter(claimed)
                .map(|url| async move { self.expand(&url).await })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

            for link in outbound.into_iter().flatten() {
                if !visited.contains(&link) {
                    next.insert(link);
                }
            }
        }

        info!(
            pages = visited.len(),
            unexpanded = next.len(),
            "crawl finished"
        );

        visited
    }

    // Fetches one page and returns its same-origin links
    //
    // Any fetch failure means "no links": we don't retry and we don't
    // tell the caller.
    async fn expand(&self, url: &str) -> Vec<String> {
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                debug!(url, error = %e, "fetch failed");
                return Vec::new();
            }
        };

        let links = same_origin_links(&page.origin, self.extractor.extract_links(&page.content));
        debug!(url, origin = %page.origin, links = links.len(), "fetched page");
        links
    }
}

// Resolves raw hrefs against `origin` and keeps the ones inside it
fn same_origin_links(origin: &Origin, hrefs: Vec<String>) -> Vec<String> {
    hrefs
        .iter()
        .filter_map(|href| origin.resolve(href))
        .filter(|link| origin.contains(link))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two sets instead of a VecDeque?
//    - A queue mixes pages of different depths together
//    - With one set per level we know exactly when a level is finished
//    - Sets also swallow duplicate links for free
//
// 2. What does std::mem::take do?
//    - It moves the value out and leaves Default::default() (an empty set)
//    - So "current = next; next = empty" is one line with no clone
//
// 3. Why does HashSet::insert return a bool?
//    - true = the value was new, false = it was already there
//    - That lets us test "not visited yet" and mark it visited in one call
//
// 4. What is buffer_unordered?
//    - It runs up to N futures at once and yields results as they finish
//    - With N = 1 it behaves like a plain sequential loop
// -----------------------------------------------------------------------------
