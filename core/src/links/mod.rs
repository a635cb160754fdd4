//! Link inspection for chat messages.
//!
//! URLs are pulled out of free text, normalized, and checked against a
//! blocklist or the content of the page they point to. Loading pages is left
//! to a [`PageFetcher`] supplied by the caller.
//!
//! ```
//! use stackbot_core::api::ScanOptions;
//! use stackbot_core::links::{FetchError, RickrollDetector, ScanVerdict};
//!
//! let fetch = |_: &str| -> Result<Vec<u8>, FetchError> {
//!     Ok(b"<title>Never Gonna Give You Up</title>".to_vec())
//! };
//! let mut detector = RickrollDetector::new(fetch);
//! let verdict = detector.scan_message("watch youtu.be/xyz", &ScanOptions::default());
//! assert_eq!(verdict, ScanVerdict::Rickroll("youtu.be/xyz".to_string()));
//! ```

mod detector;
mod rate_limit;
mod url;


pub use detector::{
    Blocklist, FetchError, KNOWN_RICKROLLS, PageFetcher, RickrollDetector, ScanVerdict,
    UrlVerdict,
};
pub use rate_limit::{COOLDOWN_REPLY, Cooldowns, RateLimiter};
pub use url::{contains_rickroll, extract_urls, normalize_url};
