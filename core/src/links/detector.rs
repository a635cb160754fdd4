//! Deciding whether a link leads to a rickroll.

use hashbrown::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{Diagnostic, ScanOptions, Severity};
use crate::links::{contains_rickroll, extract_urls, normalize_url};
use crate::syntax::Span;

/// Links that are rickrolls even though their page content gives no hint.
pub const KNOWN_RICKROLLS: &[&str] = &["https://www.tenor.com/view/spoiler-gif-24641133"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("failed to load {url}: {reason}")]
    Request { url: String, reason: String },

    #[error("{url} did not return UTF-8 text")]
    NotText { url: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } | FetchError::NotText { url } => url,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            message: self.to_string(),
            span: Span::default(),
            help: vec!["Check that the link opens in a browser".to_string()],
            code: Some(String::from("F001")),
        }
    }
}

/// Loads the body of a web page.
///
/// The detector never talks to the network itself; front ends supply an
/// HTTP client through this trait.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F> PageFetcher for F
where
    F: Fn(&str) -> Result<Vec<u8>, FetchError>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self(url)
    }
}

/// Normalized links known to be rickrolls.
#[derive(Debug, Clone)]
pub struct Blocklist {
    urls: HashSet<String>,
}

impl Blocklist {
    pub fn empty() -> Self {
        Self {
            urls: HashSet::new(),
        }
    }

    pub fn insert(&mut self, url: &str) {
        self.urls.insert(normalize_url(url).to_string());
    }

    pub fn contains(&self, url: &str) -> bool {
        self.contains_normalized(normalize_url(url))
    }

    /// Membership test for a link that has already been normalized.
    fn contains_normalized(&self, normalized: &str) -> bool {
        self.urls.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        let mut blocklist = Self::empty();
        for url in KNOWN_RICKROLLS {
            blocklist.insert(url);
        }
        blocklist
    }
}

/// Outcome of scanning every link in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanVerdict {
    NoUrls,
    TooManyUrls { count: usize },
    /// The first link found to be a rickroll, as written in the message.
    Rickroll(String),
    /// No rickroll among the links that could be loaded.
    Clean,
    /// Not a single link could be loaded.
    Unreachable { plural: bool },
}

impl ScanVerdict {
    /// The chat reply for this verdict.
    pub fn reply(&self) -> String {
        match self {
            ScanVerdict::NoUrls => String::from("No URLs found!"),
            ScanVerdict::TooManyUrls { .. } => String::from("Exceeded maximum number of URLs!"),
            ScanVerdict::Rickroll(url) => format!("This is a Rickroll 👎: <{url}>"),
            ScanVerdict::Clean => String::from("No Rickrolls found 👍"),
            ScanVerdict::Unreachable { plural } => {
                format!("Couldn't load url{} 💥", if *plural { "s" } else { "" })
            }
        }
    }

    /// Whether the verdict is a refusal to scan at all, rather than a result.
    pub fn is_refusal(&self) -> bool {
        matches!(self, ScanVerdict::NoUrls | ScanVerdict::TooManyUrls { .. })
    }
}

/// Outcome of checking a single link on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlVerdict {
    Rickroll,
    NotRickroll,
    Unreachable,
}

impl UrlVerdict {
    /// The chat reply for this verdict.
    pub fn reply(&self) -> &'static str {
        match self {
            UrlVerdict::Rickroll => "It's a Rickroll 👎",
            UrlVerdict::NotRickroll => "It's not a Rickroll 👍",
            UrlVerdict::Unreachable => "Couldn't load url 💥",
        }
    }
}

/// Checks links for rickrolls, remembering every answer it managed to get.
pub struct RickrollDetector<F> {
    fetcher: F,
    blocklist: Blocklist,
    answers: HashMap<String, bool>,
}

impl<F: PageFetcher> RickrollDetector<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_blocklist(fetcher, Blocklist::default())
    }

    pub fn with_blocklist(fetcher: F, blocklist: Blocklist) -> Self {
        Self {
            fetcher,
            blocklist,
            answers: HashMap::new(),
        }
    }

    pub fn blocklist(&self) -> &Blocklist {
        &self.blocklist
    }

    /// Whether `url` leads to a rickroll.
    ///
    /// Blocklisted links answer immediately. Otherwise the page is loaded
    /// over plain `http://` and its text searched for rickroll phrases.
    /// Failed loads are not remembered and are retried on the next call.
    pub fn is_rickroll(&mut self, url: &str) -> Result<bool, FetchError> {
        let normalized = normalize_url(url);
        if let Some(answer) = self.answers.get(normalized) {
            return Ok(*answer);
        }

        let answer = if self.blocklist.contains_normalized(normalized) {
            true
        } else {
            let address = format!("http://{normalized}");
            debug!(url = %address, "Fetching page");
            let body = self.fetcher.fetch(&address)?;
            let text =
                String::from_utf8(body).map_err(|_| FetchError::NotText { url: address })?;
            contains_rickroll(&text)
        };

        self.answers.insert(normalized.to_string(), answer);
        Ok(answer)
    }

    /// Check one link named by the user.
    ///
    /// Unlike [`scan_message`](Self::scan_message) the argument is used as
    /// given, without looking for URLs inside it.
    pub fn check_url(&mut self, url: &str) -> UrlVerdict {
        match self.is_rickroll(url) {
            Ok(true) => UrlVerdict::Rickroll,
            Ok(false) => UrlVerdict::NotRickroll,
            Err(err) => {
                warn!(error = %err, "Failed to check a URL for Rickrolls");
                UrlVerdict::Unreachable
            }
        }
    }

    /// Check every link in a chat message.
    ///
    /// Links are checked in order and the first rickroll wins. A link that
    /// fails to load is logged and skipped.
    #[tracing::instrument(level = "debug", skip(self, options))]
    pub fn scan_message(&mut self, text: &str, options: &ScanOptions) -> ScanVerdict {
        let urls = extract_urls(text);
        if urls.is_empty() {
            return ScanVerdict::NoUrls;
        }
        if urls.len() > options.max_urls {
            return ScanVerdict::TooManyUrls { count: urls.len() };
        }

        let mut failed = 0;
        for url in &urls {
            match self.is_rickroll(url) {
                Ok(true) => return ScanVerdict::Rickroll(url.to_string()),
                Ok(false) => {}
                Err(err) => {
                    warn!(error = %err, "Failed to check a URL for Rickrolls");
                    failed += 1;
                }
            }
        }

        if failed < urls.len() {
            ScanVerdict::Clean
        } else {
            ScanVerdict::Unreachable {
                plural: urls.len() > 1,
            }
        }
    }
}
