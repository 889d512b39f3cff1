//! Data models for fetched headlines and their summarized representations.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`Article`]: One headline as returned by the news API
//! - [`HeadlinesResponse`]: The top-headlines response envelope
//! - [`Summary`]: The bullet-point reduction of one article
//! - [`Digest`] / [`DigestItem`]: One run's output, serialized as a JSON
//!   edition file
//!
//! `Article` and the envelope use camelCase field names to match the wire
//! format, mapped via `#[serde(rename_all = "camelCase")]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One news headline as fetched from the news API.
///
/// Every field is optional on the wire except the title, which the API may
/// still send as an empty string. Unknown fields (author, content,
/// urlToImage, ...) are ignored on deserialization. Articles are immutable
/// once fetched.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The headline text. May be empty.
    #[serde(default)]
    pub title: String,
    /// The article lede/description. Often `null` for syndicated items.
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the full article.
    #[serde(default)]
    pub url: Option<String>,
    /// Publication timestamp in RFC 3339, when the API provides one.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// The top-headlines response envelope.
///
/// On success `status` is `"ok"` and `articles` is populated; on failure
/// `status` is `"error"` and `code`/`message` describe the problem.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The bullet-point summary of exactly one [`Article`].
///
/// A summary always holds between 1 and 3 bullets; construction enforces
/// that it is never empty. It is a pure value with no ownership beyond the
/// producing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    bullets: Vec<String>,
}

impl Summary {
    /// A summary consisting of a single line, used for the degenerate-input
    /// fallbacks (no content, short content).
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            bullets: vec![line.into()],
        }
    }

    /// Build a summary from formatted bullets, substituting the
    /// could-not-summarize line if every candidate was dropped.
    pub fn from_bullets(bullets: Vec<String>) -> Self {
        if bullets.is_empty() {
            Self::single("• Content could not be summarized.")
        } else {
            Self { bullets }
        }
    }

    /// The bullets, in presentation order.
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }
}

/// One run's digest, written as a JSON edition file when requested.
///
/// Each execution produces at most one `Digest`. The `local_date` and
/// `time_of_day` fields determine the output path so morning, afternoon,
/// and evening runs land in separate files.
#[derive(Debug, Deserialize, Serialize)]
pub struct Digest {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The edition name: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// The category alias the run was invoked with.
    pub category: String,
    /// The two-letter country code the run was invoked with.
    pub country: String,
    /// The summarized headlines, in fetch order.
    pub items: Vec<DigestItem>,
}

/// One summarized headline inside a [`Digest`].
#[derive(Debug, Deserialize, Serialize)]
pub struct DigestItem {
    pub article: Article,
    pub bullets: Vec<String>,
}
