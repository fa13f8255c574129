//! Extractor configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do with a `.json` attachment whose payload is not valid JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedAttachmentPolicy {
    /// Stop and report `AttachmentJsonMalformed`
    #[default]
    Fail,
    /// Log, skip the attachment and keep looking
    Skip,
}

/// Settings for the HTTP resource fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// `User-Agent` sent with every request
    pub user_agent: String,

    /// Redirects followed before giving up
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
            max_redirects: 10,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Directory holding `.eml` files
    pub email_dir: PathBuf,

    pub malformed_attachment: MalformedAttachmentPolicy,

    pub fetcher: FetcherConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            email_dir: PathBuf::from("emails"),
            malformed_attachment: MalformedAttachmentPolicy::default(),
            fetcher: FetcherConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
