#![allow(dead_code)]

use email_json_extract::{FetchError, JsonContent, RawEmail, ResourceFetcher};
use std::collections::HashMap;
use std::sync::Mutex;

/// A request seen by [`FakeFetcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Json(String),
    Page(String),
}

/// In-memory fetcher that records every call
#[derive(Debug, Default)]
pub struct FakeFetcher {
    json: HashMap<String, Result<JsonContent, FetchError>>,
    pages: HashMap<String, Result<Vec<String>, FetchError>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, json: JsonContent) -> Self {
        self.json.insert(url.to_string(), Ok(json));
        self
    }

    pub fn with_json_error(mut self, url: &str) -> Self {
        self.json
            .insert(url.to_string(), Err(FetchError::new(url, "HTTP 500 Internal Server Error")));
        self
    }

    pub fn with_page(mut self, url: &str, links: &[&str]) -> Self {
        self.pages.insert(
            url.to_string(),
            Ok(links.iter().map(|l| (*l).to_string()).collect()),
        );
        self
    }

    pub fn with_page_error(mut self, url: &str) -> Self {
        self.pages
            .insert(url.to_string(), Err(FetchError::new(url, "connection refused")));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl ResourceFetcher for FakeFetcher {
    fn fetch_json(&self, url: &str) -> Result<JsonContent, FetchError> {
        self.calls.lock().unwrap().push(Call::Json(url.to_string()));
        self.json
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::new(url, "HTTP 404 Not Found")))
    }

    fn fetch_html_links(&self, url: &str) -> Result<Vec<String>, FetchError> {
        self.calls.lock().unwrap().push(Call::Page(url.to_string()));
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::new(url, "HTTP 404 Not Found")))
    }
}

/// Plain-text email with the given body
pub fn text_email(body: &str) -> RawEmail {
    RawEmail::new(
        format!(
            "From: sender@example.com\r\n\
             To: inbox@example.com\r\n\
             Subject: Data\r\n\
             Content-Type: text/plain; charset=utf-8\r\n\
             \r\n\
             {body}"
        )
        .into_bytes(),
    )
}

/// Multipart email with a text body and `(filename, payload)` attachments
pub fn email_with_attachments(body: &str, attachments: &[(&str, &str)]) -> RawEmail {
    let mut raw = String::from(
        "From: sender@example.com\r\n\
         To: inbox@example.com\r\n\
         Subject: Data\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/mixed; boundary=\"BOUNDARY\"\r\n\
         \r\n\
         --BOUNDARY\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         \r\n",
    );
    raw.push_str(body);
    raw.push_str("\r\n");

    for (name, payload) in attachments {
        raw.push_str(&format!(
            "--BOUNDARY\r\n\
             Content-Type: application/octet-stream\r\n\
             Content-Disposition: attachment; filename=\"{name}\"\r\n\
             \r\n\
             {payload}\r\n"
        ));
    }
    raw.push_str("--BOUNDARY--\r\n");

    RawEmail::new(raw.into_bytes())
}
