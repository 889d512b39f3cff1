//! Console presenter.
//!
//! Builds the banner, per-article blocks, and footer as plain strings; the
//! orchestrator prints them. Keeping the builders pure makes the exact
//! output testable without capturing stdout.

use crate::models::{Article, Summary};
use crate::utils::upcase;
use std::fmt::Write;

const RULE: &str = "============================================================";

/// The digest banner: title line with the category, then country and date.
pub fn header(category: &str, country_label: &str, date: &str) -> String {
    let mut out = String::new();
    writeln!(out, "{RULE}").unwrap();
    writeln!(out, "📰 Daily News Digest - {} News", upcase(category)).unwrap();
    writeln!(out, "   Country: {country_label} | {date}").unwrap();
    writeln!(out, "{RULE}").unwrap();
    out
}

/// One numbered article block: title, optional link line, then the
/// summary bullets indented beneath.
pub fn article(index: usize, article: &Article, summary: &Summary) -> String {
    let title = if article.title.is_empty() {
        "Untitled"
    } else {
        &article.title
    };

    let mut out = String::new();
    writeln!(out, "\n{index}. {title}").unwrap();
    if let Some(url) = article.url.as_deref() {
        writeln!(out, "   🔗 {url}").unwrap();
    }
    for bullet in summary.bullets() {
        writeln!(out, "   {bullet}").unwrap();
    }
    out
}

/// Closing line; mentions the interrupt hint only when voice is active.
pub fn footer(voice_enabled: bool) -> String {
    if voice_enabled {
        "\nPress Ctrl+C to stop voice reading\n".to_string()
    } else {
        "\nRun with --voice to hear the digest read aloud\n".to_string()
    }
}

/// Text printed by `--setup`.
pub fn setup_instructions() -> String {
    r#"
🚀 Daily News Digest - Setup Instructions

1. Get a free NewsAPI key:
   • Visit: https://newsapi.org/
   • Sign up for a free account
   • Copy your API key

2. Set your API key:
   export NEWSAPI_KEY=your_api_key_here
   (or pass it with --api-key, or put `api_key:` in a config file)

3. Optional voice output:
   Install espeak-ng (Linux) or use the built-in `say` command (macOS),
   then run with --voice.

4. Run the app:
   daily_news_digest --category tech --voice

Available category aliases: tech, sports, politics, entertainment, business, health, science
Available countries: us, in, uk, ca, au

Examples:
   daily_news_digest -c sports --country us -v
   daily_news_digest --category politics --country in
   daily_news_digest -c science -j ./digests
"#
    .to_string()
}
