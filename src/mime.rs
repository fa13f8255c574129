//! MIME parsing adapter

use crate::error::{ExtractionError, Result};
use crate::html::html_to_text;
use crate::types::{Attachment, ParsedEmail, RawEmail};
use mailparse::{DispositionType, ParsedMail};
use tracing::debug;

/// Turns raw message bytes into a [`ParsedEmail`]
pub trait MimeParser {
    fn parse_mime(&self, raw: &RawEmail) -> Result<ParsedEmail>;
}

/// [`MimeParser`] backed by the `mailparse` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct MailparseParser;

impl MimeParser for MailparseParser {
    fn parse_mime(&self, raw: &RawEmail) -> Result<ParsedEmail> {
        let parsed = mailparse::parse_mail(raw.as_bytes())
            .map_err(|e| ExtractionError::MimeMalformed(e.to_string()))?;

        let mut email = ParsedEmail::default();
        if parsed.subparts.is_empty() {
            collect_leaf(&parsed, &mut email, true);
        } else {
            collect_subparts(&parsed, &mut email);
        }

        // Links are only ever scanned in text, never in markup
        if email.text.is_empty() {
            email.text_from_html = email.html.as_deref().map(html_to_text);
        }

        debug!(
            attachments = email.attachments.len(),
            has_text = !email.text.is_empty(),
            has_html = email.html.is_some(),
            "Parsed MIME structure"
        );

        Ok(email)
    }
}

fn collect_subparts(parsed: &ParsedMail, email: &mut ParsedEmail) {
    for part in &parsed.subparts {
        if part.subparts.is_empty() {
            collect_leaf(part, email, false);
        } else {
            collect_subparts(part, email);
        }
    }
}

/// A single-part message treats any non-HTML body as text; inside a
/// multipart only `text/plain` counts.
fn collect_leaf(part: &ParsedMail, email: &mut ParsedEmail, single_part: bool) {
    let disposition = part.get_content_disposition();
    let name = disposition
        .params
        .get("filename")
        .or_else(|| part.ctype.params.get("name"))
        .cloned();

    if disposition.disposition == DispositionType::Attachment || name.is_some() {
        match part.get_body_raw() {
            Ok(content) => email.attachments.push(Attachment { name, content }),
            Err(e) => debug!(error = %e, "Skipping undecodable attachment"),
        }
        return;
    }

    let content_type = part.ctype.mimetype.to_lowercase();
    let Ok(body) = part.get_body() else {
        return;
    };

    if content_type.contains("text/html") {
        if email.html.is_none() {
            email.html = Some(body);
        }
    } else if (single_part || content_type.contains("text/plain")) && email.text.is_empty() {
        email.text = body;
    }
}
