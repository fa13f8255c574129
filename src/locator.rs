//! The extraction cascade: attachment, then body link, then linked page

use crate::config::MalformedAttachmentPolicy;
use crate::error::{ExtractionError, Result};
use crate::fetcher::ResourceFetcher;
use crate::links::{find_json_url, find_page_url};
use crate::mime::{MailparseParser, MimeParser};
use crate::types::{ExtractionOutcome, JsonContent, ParsedEmail, RawEmail, Stage};
use tracing::{debug, info, warn};

/// Result of a single stage. `NoMatch` hands over to the next stage.
#[derive(Debug)]
enum StageOutcome {
    Found(JsonContent),
    NoMatch,
}

/// Resolves an email to the JSON it carries or points at.
///
/// Stages run strictly in order and the first one that finds a candidate
/// decides the outcome. A candidate that fails to yield JSON ends the call
/// with an error rather than falling through.
#[derive(Debug, Clone)]
pub struct Locator<F, M = MailparseParser> {
    fetcher: F,
    mime: M,
    malformed_attachment: MalformedAttachmentPolicy,
}

impl<F: ResourceFetcher> Locator<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_mime_parser(fetcher, MailparseParser)
    }
}

impl<F: ResourceFetcher, M: MimeParser> Locator<F, M> {
    pub const fn with_mime_parser(fetcher: F, mime: M) -> Self {
        Self {
            fetcher,
            mime,
            malformed_attachment: MalformedAttachmentPolicy::Fail,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MalformedAttachmentPolicy) -> Self {
        self.malformed_attachment = policy;
        self
    }

    /// Find the JSON content of `raw`
    pub fn locate(&self, raw: &RawEmail) -> ExtractionOutcome {
        self.locate_with_stage(raw).map(|(_, json)| json)
    }

    /// Like [`Self::locate`], also reporting which stage produced the result
    pub fn locate_with_stage(&self, raw: &RawEmail) -> Result<(Stage, JsonContent)> {
        let email = self.mime.parse_mime(raw)?;
        self.locate_parsed(&email)
    }

    /// Run the cascade over an already parsed email
    pub fn locate_parsed(&self, email: &ParsedEmail) -> Result<(Stage, JsonContent)> {
        if let StageOutcome::Found(json) = self.scan_attachments(email)? {
            info!(stage = %Stage::Attachment, "Found JSON content");
            return Ok((Stage::Attachment, json));
        }
        debug!("No JSON attachment found in the email");

        let text = email.link_text();

        if let StageOutcome::Found(json) = self.follow_body_link(text)? {
            info!(stage = %Stage::BodyLink, "Found JSON content");
            return Ok((Stage::BodyLink, json));
        }
        debug!("No JSON link found in the email body");

        if let StageOutcome::Found(json) = self.follow_page_link(text)? {
            info!(stage = %Stage::PageLink, "Found JSON content");
            return Ok((Stage::PageLink, json));
        }
        debug!("No link found in the email body");

        Err(ExtractionError::NoJsonContentFound)
    }

    fn scan_attachments(&self, email: &ParsedEmail) -> Result<StageOutcome> {
        for attachment in email.attachments.iter().filter(|a| a.is_json()) {
            let name = attachment.name.clone().unwrap_or_default();

            match serde_json::from_slice(&attachment.content) {
                Ok(json) => {
                    debug!(attachment = %name, "Parsed JSON attachment");
                    return Ok(StageOutcome::Found(json));
                }
                Err(source) => match self.malformed_attachment {
                    MalformedAttachmentPolicy::Fail => {
                        return Err(ExtractionError::AttachmentJsonMalformed { name, source });
                    }
                    MalformedAttachmentPolicy::Skip => {
                        warn!(attachment = %name, error = %source, "Skipping malformed JSON attachment");
                    }
                },
            }
        }

        Ok(StageOutcome::NoMatch)
    }

    fn follow_body_link(&self, text: &str) -> Result<StageOutcome> {
        let Some(url) = find_json_url(text) else {
            return Ok(StageOutcome::NoMatch);
        };
        info!(url, "Found JSON URL");

        self.fetcher
            .fetch_json(url)
            .map(StageOutcome::Found)
            .map_err(ExtractionError::BodyLinkFetchFailed)
    }

    fn follow_page_link(&self, text: &str) -> Result<StageOutcome> {
        let Some(page_url) = find_page_url(text) else {
            return Ok(StageOutcome::NoMatch);
        };
        info!(url = page_url, "Found web page URL");

        let links = self
            .fetcher
            .fetch_html_links(page_url)
            .map_err(ExtractionError::PageFetchFailed)?;

        let Some(json_url) = links.first() else {
            warn!(url = page_url, "No JSON link found on the web page");
            return Err(ExtractionError::PageHasNoJsonLink(page_url.to_string()));
        };
        debug!(url = %json_url, candidates = links.len(), "Following first JSON link on page");

        self.fetcher
            .fetch_json(json_url)
            .map(StageOutcome::Found)
            .map_err(ExtractionError::PageFetchFailed)
    }
}
