// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email JSON Extractor
//!
//! Finds the JSON payload an email carries or points at. Strategies are
//! tried in a fixed order and the first candidate decides the outcome:
//!
//! 1. an attachment whose name ends in `.json`
//! 2. a `.json` URL in the message body
//! 3. a web page URL in the body whose page links to a `.json` resource
//!
//! # Example
//!
//! ```rust
//! use email_json_extract::{FetcherConfig, HttpFetcher, Locator, RawEmail};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = RawEmail::from(
//!     &b"From: orders@example.com\r\n\
//!        Content-Type: multipart/mixed; boundary=\"x\"\r\n\
//!        \r\n\
//!        --x\r\n\
//!        Content-Type: text/plain\r\n\
//!        \r\n\
//!        Order attached.\r\n\
//!        --x\r\n\
//!        Content-Type: application/json\r\n\
//!        Content-Disposition: attachment; filename=\"order-123.json\"\r\n\
//!        \r\n\
//!        {\"id\":42}\r\n\
//!        --x--\r\n"[..],
//! );
//!
//! let locator = Locator::new(HttpFetcher::new(&FetcherConfig::default())?);
//! let json = locator.locate(&raw)?;
//!
//! assert_eq!(json["id"], 42);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod extractor;
mod fetcher;
mod html;
mod links;
mod locator;
mod mime;
mod source;
mod types;

pub use config::{ExtractorConfig, FetcherConfig, MalformedAttachmentPolicy};
pub use error::{ExtractionError, ExtractionErrorKind, FetchError, Result, StatusClass};
pub use extractor::JsonExtractor;
pub use fetcher::{HttpFetcher, ResourceFetcher};
pub use html::{HtmlLinkParser, ScraperLinkParser, html_to_text, json_links_in_page};
pub use links::{find_json_url, find_page_url, is_json_href};
pub use locator::Locator;
pub use mime::{MailparseParser, MimeParser};
pub use source::EmailDirectory;
pub use types::*;
