//! Error types for JSON extraction

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Failure while retrieving a remote resource.
///
/// The locator only cares that a fetch failed, so transport errors, non-2xx
/// statuses and undecodable bodies all collapse into this one type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch {url}: {reason}")]
pub struct FetchError {
    pub url: String,
    pub reason: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that end an extraction call
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// File name rejected before any I/O
    #[error("Invalid email file name: {0}")]
    InvalidFileName(String),

    /// The email file could not be read
    #[error("Could not read the specified file {name}: {source}")]
    FileUnreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The MIME parser rejected the message
    #[error("Failed to parse email structure: {0}")]
    MimeMalformed(String),

    /// A `.json` attachment did not contain valid JSON
    #[error("Attachment {name} is not valid JSON: {source}")]
    AttachmentJsonMalformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON link found in the body could not be fetched
    #[error("Failed to fetch JSON from body link: {0}")]
    BodyLinkFetchFailed(#[source] FetchError),

    /// The page linked from the body, or the JSON it links to, could not be fetched
    #[error("Failed to fetch linked page content: {0}")]
    PageFetchFailed(#[source] FetchError),

    /// The linked page contains no anchor ending in `.json`
    #[error("No JSON content found in the redirected page {0}")]
    PageHasNoJsonLink(String),

    /// Nothing in the email points at JSON
    #[error("No JSON content found in the email")]
    NoJsonContentFound,

    /// The HTTP client could not be built from its configuration
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

impl ExtractionError {
    /// The flat category of this error
    #[must_use]
    pub const fn kind(&self) -> ExtractionErrorKind {
        match self {
            Self::InvalidFileName(_) => ExtractionErrorKind::InvalidFileName,
            Self::FileUnreadable { .. } => ExtractionErrorKind::FileUnreadable,
            Self::MimeMalformed(_) => ExtractionErrorKind::MimeMalformed,
            Self::AttachmentJsonMalformed { .. } => ExtractionErrorKind::AttachmentJsonMalformed,
            Self::BodyLinkFetchFailed(_) => ExtractionErrorKind::BodyLinkFetchFailed,
            Self::PageFetchFailed(_) => ExtractionErrorKind::PageFetchFailed,
            Self::PageHasNoJsonLink(_) => ExtractionErrorKind::PageHasNoJsonLink,
            Self::NoJsonContentFound => ExtractionErrorKind::NoJsonContentFound,
            Self::HttpClient(_) => ExtractionErrorKind::HttpClient,
        }
    }
}

/// Category of an [`ExtractionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExtractionErrorKind {
    InvalidFileName,
    FileUnreadable,
    MimeMalformed,
    AttachmentJsonMalformed,
    BodyLinkFetchFailed,
    PageFetchFailed,
    PageHasNoJsonLink,
    NoJsonContentFound,
    HttpClient,
}

impl ExtractionErrorKind {
    /// Suggested response class for a calling web layer.
    ///
    /// Advisory only; the exact status code is the caller's decision.
    #[must_use]
    pub const fn status_class(self) -> StatusClass {
        match self {
            Self::InvalidFileName
            | Self::FileUnreadable
            | Self::MimeMalformed
            | Self::AttachmentJsonMalformed => StatusClass::BadInput,
            Self::PageHasNoJsonLink | Self::NoJsonContentFound => StatusClass::NotFound,
            Self::BodyLinkFetchFailed | Self::PageFetchFailed => StatusClass::Upstream,
            Self::HttpClient => StatusClass::Internal,
        }
    }
}

impl fmt::Display for ExtractionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidFileName => "invalid_file_name",
            Self::FileUnreadable => "file_unreadable",
            Self::MimeMalformed => "mime_malformed",
            Self::AttachmentJsonMalformed => "attachment_json_malformed",
            Self::BodyLinkFetchFailed => "body_link_fetch_failed",
            Self::PageFetchFailed => "page_fetch_failed",
            Self::PageHasNoJsonLink => "page_has_no_json_link",
            Self::NoJsonContentFound => "no_json_content_found",
            Self::HttpClient => "http_client",
        };
        write!(f, "{s}")
    }
}

/// Coarse response class a caller can map to a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusClass {
    BadInput,
    NotFound,
    Upstream,
    Internal,
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractionError>;
