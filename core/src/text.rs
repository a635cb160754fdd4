//! Small text utilities for chat replies.

mod time_tag;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::literal::Literal;

pub use time_tag::{
    TimeTagError, new_york_instant, parse_clock_time, time_tag, time_tag_today,
};

static SEE_SHARP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(c+[a@4]+n+'*[t7]+|c+[a@4]+n+[o0]+[t7]+)\s*([s$]+[e3]+\s*[s$]+h+[a@4]+r*p+|c+\s*[s$]+h+[a@4]+r+p+|c+\s*#+)",
    )
    .expect("valid joke pattern")
});

/// Reply used when there is nothing to quote.
pub const EMPTY_MESSAGE: &str = "*Empty Message*";

/// Longest cheat sheet body that fits in an embed unclipped.
pub const CHEAT_SHEET_LIMIT: usize = 992;

/// Most `u`s a [`bruh`] can have.
pub const BRUH_LIMIT: usize = 100;

/// Quote a message so that it renders exactly as typed.
///
/// Markdown control characters are escaped and every line is prefixed with
/// `> `. Content that is empty or only whitespace yields [`EMPTY_MESSAGE`].
///
/// ```
/// use stackbot_core::text::quote_verbatim;
///
/// assert_eq!(quote_verbatim("*hi*\nthere"), "> \\*hi\\*\n> there");
/// ```
pub fn quote_verbatim(content: &str) -> String {
    if content.trim().is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let escaped = content
        .replace('\\', r"\\")
        .replace('<', r"\<")
        .replace("> ", r"\> ")
        .replace('*', r"\*")
        .replace('_', r"\_")
        .replace('`', r"\`")
        .replace('|', r"\|");

    let lines: Vec<&str> = escaped.split('\n').collect();
    format!("> {}", lines.join("\n> "))
}

/// Whether `content` jokes about not being able to "see sharp".
///
/// Matching is case-insensitive and tolerates common leetspeak substitutions.
pub fn is_see_sharp_joke(content: &str) -> bool {
    SEE_SHARP.is_match(&content.to_lowercase())
}

/// A message as a Python string literal in a code block, so escapes,
/// markdown and invisible characters show up as typed.
///
/// ```
/// use stackbot_core::text::raw_message;
///
/// assert_eq!(raw_message("*hi*\tthere"), "```\n'*hi*\\tthere'\n```");
/// ```
pub fn raw_message(content: &str) -> String {
    format!("```\n{}\n```", Literal::Str(content.to_string()))
}

/// "Bruh" with `count` u's, capped at [`BRUH_LIMIT`].
///
/// A missing or non-positive count picks a random length from 5 to
/// [`BRUH_LIMIT`].
pub fn bruh<R: Rng + ?Sized>(count: Option<i64>, rng: &mut R) -> String {
    let length = match count {
        Some(n) if n > 0 => usize::try_from(n).map_or(BRUH_LIMIT, |n| n.min(BRUH_LIMIT)),
        _ => rng.gen_range(5..=BRUH_LIMIT),
    };
    format!("Br{}h", "u".repeat(length))
}

/// A request for a page of <https://cht.sh>.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatSheet {
    /// Link shown to readers.
    pub url: String,
    pub title: String,
}

impl CheatSheet {
    /// The address that serves the page as plain text without colors.
    pub fn query_url(&self) -> String {
        format!("{}?qT", self.url)
    }
}

/// Build the cheat sheet request for `language` and an optional `topic`.
///
/// ```
/// use stackbot_core::text::cheat_sheet;
///
/// let sheet = cheat_sheet("/python", Some("list comprehension"));
/// assert_eq!(sheet.url, "https://cht.sh/python/list comprehension");
/// assert_eq!(sheet.title, "Cheat Sheet: Python - List Comprehension");
/// ```
pub fn cheat_sheet(language: &str, topic: Option<&str>) -> CheatSheet {
    let language = language.trim_start_matches('/');
    let mut url = format!("https://cht.sh/{language}");
    let mut title = format!("Cheat Sheet: {}", title_case(language));

    if let Some(topic) = topic.filter(|t| !t.is_empty()) {
        url.push('/');
        url.push_str(topic);
        title.push_str(" - ");
        title.push_str(&title_case(topic));
    }

    CheatSheet { url, title }
}

/// Shorten a cheat sheet body to fit an embed.
pub fn clip_cheat_sheet(content: &str) -> String {
    if content.chars().count() <= CHEAT_SHEET_LIMIT {
        return content.to_string();
    }
    let mut clipped: String = content.chars().take(CHEAT_SHEET_LIMIT - 3).collect();
    clipped.push_str("...");
    clipped
}

// Uppercase the first letter of every run of letters, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut titled = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(c);
            in_word = false;
        }
    }
    titled
}
