// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   sitemap-builder --url https://example.com --depth 2 > sitemap.xml
// =============================================================================

use clap::Parser;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-builder",
    version,
    about = "Crawl a website breadth-first and print its sitemap",
    long_about = "sitemap-builder follows links from a starting page, staying on the same \
                  site, and prints every page it visited as an XML sitemap on stdout. \
                  Logs go to stderr (set RUST_LOG to change the level)."
)]
pub struct Cli {
    /// URL that you want to build a sitemap for
    #[arg(long, default_value = "https://gophercises.com/")]
    pub url: String,

    /// The maximum number of links deep to traverse
    ///
    /// Depth 0 = just the starting page
    /// Depth 1 = starting page + all pages it links to
    /// etc.
    #[arg(long, visible_alias = "max-depth", default_value_t = 3)]
    pub depth: usize,

    /// Output the sitemap as JSON instead of XML
    #[arg(long)]
    pub json: bool,

    /// How many pages of the same depth to fetch at once
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}
