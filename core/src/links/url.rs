//! Finding URLs in free text and recognizing rickroll pages by their content.

use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME_AND_WWW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?(.+)").expect("valid normalization pattern")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(?:https?|ftp)://)?[\w/\-?=%.]+\.[\w/\-&?=%.]+").expect("valid url pattern")
});

static RICKROLL_PHRASES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rickroll|rick roll|rick astley|never gonna give you up")
        .expect("valid phrase pattern")
});

/// Strip an optional `http://` or `https://` scheme and a leading `www.`.
///
/// Only the first line of `url` is kept. Input with nothing left after the
/// prefixes normalizes to the empty string.
///
/// ```
/// use stackbot_core::links::normalize_url;
///
/// assert_eq!(normalize_url("https://www.example.com/a"), "example.com/a");
/// assert_eq!(normalize_url("ftp://example.com"), "ftp://example.com");
/// ```
pub fn normalize_url(url: &str) -> &str {
    SCHEME_AND_WWW
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map_or("", |m| m.as_str())
}

/// Every URL-like substring of `text`, in order of appearance.
///
/// A URL is an optional `http`, `https` or `ftp` scheme followed by a host
/// containing at least one dot.
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether page content mentions one of the telltale rickroll phrases.
pub fn contains_rickroll(content: &str) -> bool {
    RICKROLL_PHRASES.is_match(&content.to_lowercase())
}
