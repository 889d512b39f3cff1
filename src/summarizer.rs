//! Extractive bullet-point summarization.
//!
//! Reduces one article's text to at most three bullets by selecting the
//! first, middle, and last sentence. The selection is deterministic and
//! rule-based: same input, same output, no external calls. Degenerate input
//! (missing text, very short text) resolves to documented fallback bullets
//! rather than errors.

use crate::models::{Article, Summary};
use once_cell::sync::Lazy;
use regex::Regex;

/// Content shorter than this (in characters) is passed through as a single
/// marker-prefixed bullet instead of being split into sentences.
const SHORT_CONTENT_CHARS: usize = 50;

/// Hard ceiling on bullets per summary.
const MAX_BULLETS: usize = 3;

/// Runs of sentence-ending punctuation collapse into one boundary, so
/// "Wait... really?!" yields two fragments and no empties.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Split text into trimmed, non-empty sentence fragments.
///
/// Delimiters are runs of `.`, `!`, or `?`; the punctuation itself is
/// discarded. Order is preserved.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Summarize one article into 1 to 3 bullets.
///
/// The description is preferred over the title; a description that is
/// non-empty but all whitespace still wins the preference and then falls
/// into the no-content bullet. Short content (under
/// [`SHORT_CONTENT_CHARS`] characters) is passed through untouched behind
/// a marker glyph. Longer content is split into sentences: three or fewer
/// are bulleted as-is, more than three are reduced to the first, middle
/// (`count / 2`), and last sentence in that order.
///
/// Never fails and performs no I/O; callers may share it freely across
/// threads.
pub fn summarize(article: &Article) -> Summary {
    let content = effective_content(article);
    let text = content.trim();

    if text.is_empty() {
        return Summary::single("No content available for this article.");
    }

    if text.chars().count() < SHORT_CONTENT_CHARS {
        return Summary::single(format!("📰 {text}"));
    }

    let sentences = split_sentences(text);

    let selected: Vec<&str> = if sentences.len() <= MAX_BULLETS {
        sentences.iter().map(String::as_str).collect()
    } else {
        let count = sentences.len();
        let mut picked = vec![sentences[0].as_str()];
        if count > 2 {
            picked.push(sentences[count / 2].as_str());
        }
        if count > 1 {
            picked.push(sentences[count - 1].as_str());
        }
        picked.truncate(MAX_BULLETS);
        picked
    };

    let bullets = selected.into_iter().filter_map(format_bullet).collect();
    Summary::from_bullets(bullets)
}

/// The text `summarize` operates on: the description when it is non-empty
/// (before trimming), otherwise the title.
fn effective_content(article: &Article) -> &str {
    match article.description.as_deref() {
        Some(description) if !description.is_empty() => description,
        _ => &article.title,
    }
}

/// Format one selected sentence as a bullet: trim, ensure a trailing
/// period, prefix the bullet glyph. Sentences that trim to nothing are
/// dropped.
fn format_bullet(sentence: &str) -> Option<String> {
    let clean = sentence.trim();
    if clean.is_empty() {
        return None;
    }
    if clean.ends_with('.') {
        Some(format!("• {clean}"))
    } else {
        Some(format!("• {clean}."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article(title: &str, description: Option<&str>) -> Article {
        Article {
            title: title.to_string(),
            description: description.map(str::to_string),
            url: None,
            published_at: None,
        }
    }

    #[test]
    fn test_empty_article_yields_no_content_bullet() {
        let summary = summarize(&article("", None));
        assert_eq!(
            summary.bullets(),
            &["No content available for this article.".to_string()]
        );

        let summary = summarize(&article("", Some("")));
        assert_eq!(
            summary.bullets(),
            &["No content available for this article.".to_string()]
        );
    }

    #[test]
    fn test_whitespace_description_beats_title_then_falls_through() {
        // A non-empty description wins the preference even when it is all
        // whitespace, which then trims to nothing.
        let summary = summarize(&article("A perfectly good title", Some("   ")));
        assert_eq!(
            summary.bullets(),
            &["No content available for this article.".to_string()]
        );
    }

    #[test]
    fn test_missing_description_falls_back_to_title() {
        let summary = summarize(&article("Rates cut", None));
        assert_eq!(summary.bullets(), &["📰 Rates cut".to_string()]);
    }

    #[test]
    fn test_short_content_passes_through_with_marker() {
        let summary = summarize(&article("", Some("  Solar output hits record high  ")));
        assert_eq!(
            summary.bullets(),
            &["📰 Solar output hits record high".to_string()]
        );
    }

    #[test]
    fn test_forty_nine_chars_is_short_fifty_is_long() {
        let short = "a".repeat(49);
        let summary = summarize(&article("", Some(&short)));
        assert_eq!(summary.bullets(), &[format!("📰 {short}")]);

        // Exactly 50 characters takes the sentence path.
        let long = "a".repeat(50);
        let summary = summarize(&article("", Some(&long)));
        assert_eq!(summary.bullets(), &[format!("• {long}.")]);
    }

    #[test]
    fn test_length_gate_counts_characters_not_bytes() {
        // 30 characters but 90 bytes of UTF-8; still the short path.
        let text = "Ö".repeat(30);
        let summary = summarize(&article("", Some(&text)));
        assert_eq!(summary.bullets(), &[format!("📰 {text}")]);
    }

    #[test]
    fn test_two_sentences_bulleted_in_order_with_periods() {
        let text = "The committee approved the measure. Opponents promised a court challenge.";
        let summary = summarize(&article("", Some(text)));
        assert_eq!(
            summary.bullets(),
            &[
                "• The committee approved the measure.".to_string(),
                "• Opponents promised a court challenge.".to_string(),
            ]
        );
    }

    #[test]
    fn test_three_sentences_all_kept() {
        let text = "Talks resumed this morning! Both sides claimed progress? A deal remains distant.";
        let summary = summarize(&article("", Some(text)));
        assert_eq!(
            summary.bullets(),
            &[
                "• Talks resumed this morning.".to_string(),
                "• Both sides claimed progress.".to_string(),
                "• A deal remains distant.".to_string(),
            ]
        );
    }

    #[test]
    fn test_four_sentences_picks_first_middle_last() {
        let text = "Aid convoys crossed the border. Hospitals reported shortages. \
                    Donors pledged more funding. Officials urged patience.";
        let summary = summarize(&article("", Some(text)));
        // count = 4: first, index 2, last.
        assert_eq!(
            summary.bullets(),
            &[
                "• Aid convoys crossed the border.".to_string(),
                "• Donors pledged more funding.".to_string(),
                "• Officials urged patience.".to_string(),
            ]
        );
    }

    #[test]
    fn test_five_sentences_picks_first_middle_last() {
        let text = "Markets opened sharply higher today. Tech led the gains. \
                    Energy lagged behind. Bond yields held steady. Analysts expect volatility.";
        let summary = summarize(&article("", Some(text)));
        // count = 5: first, index 2, last.
        assert_eq!(
            summary.bullets(),
            &[
                "• Markets opened sharply higher today.".to_string(),
                "• Energy lagged behind.".to_string(),
                "• Analysts expect volatility.".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_never_exceeds_three_bullets() {
        let text = (1..=12)
            .map(|i| format!("Sentence number {i} is here"))
            .collect::<Vec<_>>()
            .join(". ");
        let summary = summarize(&article("", Some(&text)));
        assert_eq!(summary.bullets().len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let a = article(
            "",
            Some("Markets opened sharply higher today. Tech led the gains. Energy lagged behind. Bond yields held steady."),
        );
        assert_eq!(summarize(&a), summarize(&a));
    }

    #[test]
    fn test_split_collapses_delimiter_runs() {
        assert_eq!(split_sentences("Wait... really?!"), vec!["Wait", "really"]);
    }

    #[test]
    fn test_split_preserves_order_and_drops_empties() {
        assert_eq!(
            split_sentences("One. Two!  ?? Three."),
            vec!["One", "Two", "Three"]
        );
        assert!(split_sentences("...!!!???").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_format_bullet() {
        assert_eq!(format_bullet("Done"), Some("• Done.".to_string()));
        assert_eq!(format_bullet("Done."), Some("• Done.".to_string()));
        assert_eq!(format_bullet("  padded  "), Some("• padded.".to_string()));
        assert_eq!(format_bullet("   "), None);
    }
}
