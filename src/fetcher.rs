//! Outbound retrieval of JSON documents and HTML pages

use crate::config::FetcherConfig;
use crate::error::{ExtractionError, FetchError, Result};
use crate::html::{HtmlLinkParser, ScraperLinkParser, json_links_in_page};
use crate::types::JsonContent;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Retrieves remote resources for the locator.
///
/// Every call issues exactly one request. No retries, no caching.
pub trait ResourceFetcher {
    /// GET `url` and parse the body as JSON
    fn fetch_json(&self, url: &str) -> std::result::Result<JsonContent, FetchError>;

    /// GET `url` as HTML and return its `.json` anchors as absolute URLs, in
    /// document order
    fn fetch_html_links(&self, url: &str) -> std::result::Result<Vec<String>, FetchError>;
}

impl<T: ResourceFetcher + ?Sized> ResourceFetcher for &T {
    fn fetch_json(&self, url: &str) -> std::result::Result<JsonContent, FetchError> {
        (**self).fetch_json(url)
    }

    fn fetch_html_links(&self, url: &str) -> std::result::Result<Vec<String>, FetchError> {
        (**self).fetch_html_links(url)
    }
}

/// Blocking HTTP implementation of [`ResourceFetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher<P = ScraperLinkParser> {
    client: Client,
    html_parser: P,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Self::with_parser(config, ScraperLinkParser)
    }
}

impl<P: HtmlLinkParser> HttpFetcher<P> {
    pub fn with_parser(config: &FetcherConfig, html_parser: P) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| ExtractionError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            html_parser,
        })
    }

    fn get_text(&self, url: &str) -> std::result::Result<String, FetchError> {
        debug!(url, "Fetching resource");

        let response = self.client.get(url).send().map_err(|e| {
            warn!(url, error = %e, "Request failed");
            FetchError::new(url, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = %status, "Non-success status");
            return Err(FetchError::new(url, format!("HTTP {status}")));
        }

        response
            .text()
            .map_err(|e| FetchError::new(url, format!("Failed to read response body: {e}")))
    }
}

impl<P: HtmlLinkParser> ResourceFetcher for HttpFetcher<P> {
    fn fetch_json(&self, url: &str) -> std::result::Result<JsonContent, FetchError> {
        let body = self.get_text(url)?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::new(url, format!("Response is not valid JSON: {e}")))
    }

    fn fetch_html_links(&self, url: &str) -> std::result::Result<Vec<String>, FetchError> {
        let base = Url::parse(url).map_err(|e| FetchError::new(url, format!("Invalid URL: {e}")))?;
        let html = self.get_text(url)?;
        let links = json_links_in_page(&self.html_parser, &html, &base);

        debug!(url, links = links.len(), "Collected JSON links from page");
        Ok(links)
    }
}
