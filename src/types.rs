//! Core types for JSON extraction

use serde::Serialize;
use std::fmt;

/// Extracted JSON payload. No schema beyond "is valid JSON".
pub type JsonContent = serde_json::Value;

/// Terminal result of one extraction call
pub type ExtractionOutcome = crate::error::Result<JsonContent>;

/// Raw bytes of one MIME message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEmail(Vec<u8>);

impl RawEmail {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RawEmail {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for RawEmail {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Structured view of a [`RawEmail`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEmail {
    /// Attachments in message order
    pub attachments: Vec<Attachment>,

    /// First `text/plain` body part (empty if none)
    pub text: String,

    /// First `text/html` body part
    pub html: Option<String>,

    /// Visible text of `html`, set when there is no plain text part
    pub text_from_html: Option<String>,
}

impl ParsedEmail {
    /// Text scanned for links: plain text, or the text of the HTML body when
    /// there is none. Markup is never scanned.
    #[must_use]
    pub fn link_text(&self) -> &str {
        if self.text.is_empty() {
            self.text_from_html.as_deref().unwrap_or("")
        } else {
            &self.text
        }
    }
}

/// A named payload embedded in a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name from `Content-Disposition` or `Content-Type`
    pub name: Option<String>,

    /// Decoded payload
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: Some(name.into()),
            content: content.into(),
        }
    }

    /// Whether the name ends in `.json`. Case-sensitive.
    #[must_use]
    #[allow(clippy::case_sensitive_file_extension_comparisons)]
    pub fn is_json(&self) -> bool {
        self.name.as_deref().is_some_and(|n| n.ends_with(".json"))
    }
}

/// Cascade stage that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Attachment,
    BodyLink,
    PageLink,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attachment => write!(f, "attachment"),
            Self::BodyLink => write!(f, "body_link"),
            Self::PageLink => write!(f, "page_link"),
        }
    }
}
