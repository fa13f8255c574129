//! HTML link discovery for linked pages

use crate::links::is_json_href;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Pulls anchor hrefs out of an HTML document
pub trait HtmlLinkParser {
    /// Every anchor `href`, in document order, unresolved
    fn hrefs(&self, html: &str) -> Vec<String>;
}

/// [`HtmlLinkParser`] backed by the `scraper` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperLinkParser;

impl HtmlLinkParser for ScraperLinkParser {
    fn hrefs(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|el| el.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

/// Visible text of an HTML document with entities decoded.
///
/// Text nodes are trimmed and joined with single spaces, so tag boundaries
/// always become whitespace.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    Html::parse_document(html)
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Absolute URLs of every `.json` anchor on the page at `base`.
///
/// Hrefs that cannot be resolved against `base` are dropped.
#[must_use]
pub fn json_links_in_page(parser: &impl HtmlLinkParser, html: &str, base: &Url) -> Vec<String> {
    parser
        .hrefs(html)
        .into_iter()
        .filter(|href| is_json_href(href))
        .filter_map(|href| base.join(&href).ok())
        .map(String::from)
        .collect()
}
