// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is reserved for the sitemap)
// 3. Crawl the site breadth-first
// 4. Print the sitemap
// 5. Exit with proper code (0 = success, 1 = could not write sitemap, 2 = error)
//
// Pages that fail to load never change the exit code. They just show up in
// the sitemap without contributing links.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - validated settings
mod crawl;    // src/crawl/ - the breadth-first crawler
mod extract;  // src/extract/ - pulling links out of HTML
mod fetch;    // src/fetch/ - downloading pages
mod sitemap;  // src/sitemap/ - XML / JSON output

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CrawlConfig;
use crawl::Crawler;
use extract::HtmlLinkExtractor;
use fetch::HttpFetcher;
use sitemap::Sitemap;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr; RUST_LOG overrides the default level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sitemap_builder=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = sitemap printed
//   Ok(1) = crawl finished but the sitemap couldn't be written
//   Err = bad arguments or setup failure
async fn run() -> Result<i32> {
    let config = CrawlConfig::try_from(Cli::parse())?;

    info!(
        seed = %config.seed,
        max_depth = config.max_depth,
        concurrency = config.concurrency,
        "building sitemap"
    );

    let fetcher = HttpFetcher::new(config.timeout).context("failed to create HTTP client")?;
    let crawler = Crawler::new(fetcher, HtmlLinkExtractor::new())
        .with_concurrency(config.concurrency);

    let pages = crawler.traverse(&config.seed, config.max_depth).await;
    let sitemap = Sitemap::from_urls(pages);

    let document = if config.json {
        sitemap.to_json()
    } else {
        sitemap.to_xml()
    };

    match document {
        Ok(document) => {
            println!("{}", document);
            Ok(0)
        }
        Err(e) => {
            // The crawl result is already computed; we just can't print it
            eprintln!("Error: could not write sitemap of {} page(s): {}", sitemap.urls().len(), e);
            Ok(1)
        }
    }
}
