//! File name in, JSON out

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::fetcher::{HttpFetcher, ResourceFetcher};
use crate::locator::Locator;
use crate::source::EmailDirectory;
use crate::types::{JsonContent, Stage};
use tracing::info;

/// Loads an email from an [`EmailDirectory`] and runs the [`Locator`] on it
#[derive(Debug, Clone)]
pub struct JsonExtractor<F = HttpFetcher> {
    emails: EmailDirectory,
    locator: Locator<F>,
}

impl JsonExtractor {
    /// Build an extractor that fetches over HTTP
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetcher)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: ResourceFetcher> JsonExtractor<F> {
    pub fn with_fetcher(config: &ExtractorConfig, fetcher: F) -> Self {
        Self {
            emails: EmailDirectory::new(config.email_dir.clone()),
            locator: Locator::new(fetcher).with_policy(config.malformed_attachment),
        }
    }

    /// Extract the JSON content of the email file `name`
    pub fn extract(&self, name: &str) -> Result<JsonContent> {
        self.extract_with_stage(name).map(|(_, json)| json)
    }

    pub fn extract_with_stage(&self, name: &str) -> Result<(Stage, JsonContent)> {
        let raw = self.emails.load(name)?;
        let (stage, json) = self.locator.locate_with_stage(&raw)?;
        info!(file = name, stage = %stage, "Extracted JSON from email");
        Ok((stage, json))
    }
}
