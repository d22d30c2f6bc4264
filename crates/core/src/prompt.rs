//! Prompt construction for the suggestion model.

use crate::keywords::Keyword;
use crate::metrics::Metrics;

/// System role message sent with every completion request.
pub const SYSTEM_MESSAGE: &str = "You are a helpful SEO assistant.";

/// Number of top keywords named in the summary by default.
pub const SUMMARY_KEYWORDS: usize = 5;

const INSTRUCTION: &str = "You are an SEO assistant. Given the content summary below, provide clear, \
actionable suggestions to improve on-page SEO, keyword usage, headings, \
meta description ideas, and readability. Keep the suggestions concise and \
beginner-friendly.";

/// Renders the metrics and leading keywords as a one-line summary.
///
/// Only the words of the first `max_keywords` entries are included; their
/// frequencies are dropped.
pub fn build_summary(metrics: &Metrics, keywords: &[Keyword], max_keywords: usize) -> String {
    let top_keywords = keywords
        .iter()
        .take(max_keywords)
        .map(|k| k.word.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Word count: {}. Top keywords: {}. Average sentence length: {:.1}. Long sentences: {}.",
        metrics.total_words, top_keywords, metrics.average_sentence_length, metrics.long_sentences_count
    )
}

/// Wraps `summary` verbatim in the fixed SEO instruction.
pub fn build_prompt(summary: &str) -> String {
    format!("{INSTRUCTION}\n\nContent summary:\n{summary}\n\nReturn suggestions as bullet points.")
}
