// src/config.rs
// =============================================================================
// Turns raw command-line arguments into a validated crawl configuration.
//
// The crawler itself never reads flags or environment variables. main()
// builds a CrawlConfig once and passes the values down explicitly.
// =============================================================================

use anyhow::{anyhow, bail, Result};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;
use crate::crawl::Origin;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Absolute http(s) URL the crawl starts from
    pub seed: String,
    pub max_depth: usize,
    pub concurrency: usize,
    pub timeout: Duration,
    pub json: bool,
}

impl TryFrom<Cli> for CrawlConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(Self {
            seed: validate_seed(&cli.url)?,
            max_depth: cli.depth,
            concurrency: usize::from(cli.concurrency),
            timeout: Duration::from_secs(cli.timeout),
            json: cli.json,
        })
    }
}

// Makes sure the seed is an absolute http/https URL with a host
//
// The seed is returned exactly as typed: the crawler compares URLs as
// plain strings, so we don't let the url crate rewrite it.
fn validate_seed(seed: &str) -> Result<String> {
    let parsed = Url::parse(seed).map_err(|e| anyhow!("Invalid URL '{}': {}", seed, e))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("URL must use http or https: {}", seed);
    }
    if Origin::from_url(&parsed).is_none() {
        bail!("URL has no host: {}", seed);
    }

    Ok(seed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::try_parse_from(["sitemap-builder", "--url", "http://x.test", "--depth", "2"])
            .unwrap();
        let config = CrawlConfig::try_from(cli).unwrap();

        assert_eq!(config.seed, "http://x.test");
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_relative_seed_is_rejected() {
        assert!(validate_seed("/docs").is_err());
        assert!(validate_seed("example.com").is_err());
    }

    #[test]
    fn test_non_http_seed_is_rejected() {
        assert!(validate_seed("ftp://example.com/").is_err());
        assert!(validate_seed("mailto:test@example.com").is_err());
    }
}
