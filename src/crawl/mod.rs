// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL, one level at a time
// - Same-origin restriction (doesn't crawl external sites), where the origin
//   is taken from each page *after* redirects
// - Configurable depth limit
// - Optional concurrent fetching inside a level
//
// Rust concepts:
// - Generics: The crawler doesn't care how pages are fetched or parsed
// - Collections: HashSet for the visited set and the frontiers
// =============================================================================

mod origin;
mod traverse;

pub use origin::Origin;
pub use traverse::Crawler;
