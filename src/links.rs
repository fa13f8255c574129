//! URL matchers for the body-link stages

use regex::Regex;
use std::sync::LazyLock;

// Shortest http(s) run ending in `.json` at an ASCII word boundary
static JSON_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+?\.json(?-u:\b)").unwrap());

static PAGE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"]+"#).unwrap());

/// First URL in `text` that points straight at a `.json` resource
#[must_use]
pub fn find_json_url(text: &str) -> Option<&str> {
    JSON_URL_REGEX.find(text).map(|m| m.as_str())
}

/// First http(s) URL of any kind in `text`
#[must_use]
pub fn find_page_url(text: &str) -> Option<&str> {
    PAGE_URL_REGEX.find(text).map(|m| m.as_str())
}

/// Whether an href points at a `.json` resource. Case-sensitive.
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)]
pub fn is_json_href(href: &str) -> bool {
    href.ends_with(".json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_url_leftmost_wins() {
        let text = "first https://a.com/one.json then https://b.com/two.json";
        assert_eq!(find_json_url(text), Some("https://a.com/one.json"));
    }

    #[test]
    fn test_json_url_needs_boundary() {
        assert_eq!(find_json_url("https://a.com/data.jsonp"), None);
        assert_eq!(
            find_json_url("(https://a.com/data.json)"),
            Some("https://a.com/data.json")
        );
    }

    #[test]
    fn test_json_url_boundary_is_ascii() {
        assert_eq!(
            find_json_url("https://ex.com/a.json\u{fc}"),
            Some("https://ex.com/a.json")
        );
    }

    #[test]
    fn test_json_url_stops_at_whitespace() {
        assert_eq!(find_json_url("https://a.com/x y.json"), None);
    }

    #[test]
    fn test_json_url_ignores_other_schemes() {
        assert_eq!(find_json_url("ftp://a.com/data.json"), None);
    }

    #[test]
    fn test_page_url_stops_at_markup() {
        assert_eq!(
            find_page_url(r#"<a href="https://ex.com/page">x</a>"#),
            Some("https://ex.com/page")
        );
        assert_eq!(find_page_url("Visit https://ex.com/page\n"), Some("https://ex.com/page"));
        assert_eq!(find_page_url("no links"), None);
    }

    #[test]
    fn test_json_href_is_case_sensitive() {
        assert!(is_json_href("/data.json"));
        assert!(!is_json_href("/data.JSON"));
        assert!(!is_json_href("/data.json?x=1"));
    }
}
