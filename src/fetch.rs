// src/fetch.rs
// =============================================================================
// This module owns the HTTP side of the scraper.
//
// The crawl deals in catalog paths, not URLs, so page access goes through
// the PageSource trait: a source resolves a path against the site base and
// hands back the page HTML. HttpSource is the real implementation; the
// traversal tests substitute canned pages.
//
// One reqwest Client is built at startup and reused for every request, which
// gives us connection pooling across the whole crawl.
//
// Error policy (deliberate): any network failure or non-2xx status aborts
// the run. There are no retries and no per-page recovery - a partial CSV
// from a flaky run is worse than no CSV.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// The site blocks the default reqwest user agent, so we announce ourselves
// the way a polite scraper does: browser-compatible prefix plus our name.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; DominanzScraper/1.0)";

// Where catalog pages come from
//
// `path` is a site-relative catalog path (e.g. "/sr/services/tuning/audi")
// as found in href attributes; the source resolves it against `base`.
#[async_trait]
pub trait PageSource {
    async fn get(&self, base: &Url, path: &str) -> Result<String>;
}

// The production source: fetches pages over HTTPS
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    // Builds the HTTP client used for the whole crawl
    //
    // Settings:
    //   - 20 second timeout per request (listing pages are small, anything
    //     slower than this means the site is struggling and we should stop)
    //   - custom user agent (see above)
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(20))
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn get(&self, base: &Url, path: &str) -> Result<String> {
        let url = base
            .join(path)
            .with_context(|| format!("joining '{}' to base URL", path))?;
        fetch_html(&self.client, url.as_str()).await
    }
}

// Fetches a page and returns its HTML body
//
// Errors if the request failed or the server answered with a non-success
// status.
async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("fetching {}", url))?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {} from {}", response.status(), url));
    }

    let html = response
        .text()
        .await
        .with_context(|| format!("reading body of {}", url))?;
    Ok(html)
}
