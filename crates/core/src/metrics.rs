//! Rule-based readability metrics.
//!
//! All aggregations are defined for empty input: counts are zero, the average
//! sentence length is `0.0` and the difficulty is [`Difficulty::Easy`].

use std::fmt;

use crate::tokenize::{split_sentences, token_count, tokenize};

/// Sentences with more tokens than this are counted as long.
pub const LONG_SENTENCE_WORDS: usize = 20;

/// Average sentence length at which text stops being [`Difficulty::Easy`].
pub const MODERATE_THRESHOLD: f64 = 12.0;

/// Average sentence length at which text becomes [`Difficulty::Hard`].
pub const HARD_THRESHOLD: f64 = 20.0;

/// Coarse readability label derived from average sentence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    /// Bare label: `"Easy"`, `"Moderate"` or `"Hard"`.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }

    /// Short reader-facing advice attached to the label, if any.
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Difficulty::Easy => Some("good for general audiences"),
            Difficulty::Moderate => None,
            Difficulty::Hard => Some("consider shortening sentences"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.advice() {
            Some(advice) => write!(f, "{} ({})", self.label(), advice),
            None => f.write_str(self.label()),
        }
    }
}

/// Readability metrics for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub total_words: usize,
    pub sentence_count: usize,
    /// Mean tokens per sentence, rounded to one decimal place.
    pub average_sentence_length: f64,
    pub long_sentences_count: usize,
    pub difficulty_estimate: Difficulty,
}

impl Metrics {
    /// Computes all metrics for `text`, counting sentences longer than
    /// `long_sentence_words` tokens as long.
    pub fn compute(text: &str, long_sentence_words: usize) -> Self {
        let sentences = split_sentences(text);
        let lengths = sentence_lengths(&sentences);
        let average = mean(&lengths);

        Self {
            total_words: count_words(text),
            sentence_count: sentences.len(),
            average_sentence_length: round_to_tenth(average),
            long_sentences_count: long_sentences_count(&sentences, long_sentence_words),
            difficulty_estimate: difficulty_estimate(average),
        }
    }
}

/// Total number of word tokens in `text`.
pub fn count_words(text: &str) -> usize {
    tokenize(text).len()
}

/// Mean token count per sentence; `0.0` for an empty list.
pub fn average_sentence_length(sentences: &[&str]) -> f64 {
    mean(&sentence_lengths(sentences))
}

/// Number of sentences with strictly more than `threshold` tokens.
pub fn long_sentences_count(sentences: &[&str], threshold: usize) -> usize {
    sentences.iter().filter(|s| token_count(s) > threshold).count()
}

/// Maps an average sentence length to a difficulty band.
///
/// Each band includes its lower bound: `< 12` is easy, `12..20` is moderate
/// and `>= 20` is hard.
pub fn difficulty_estimate(average_sentence_length: f64) -> Difficulty {
    if average_sentence_length < MODERATE_THRESHOLD {
        Difficulty::Easy
    } else if average_sentence_length < HARD_THRESHOLD {
        Difficulty::Moderate
    } else {
        Difficulty::Hard
    }
}

fn sentence_lengths(sentences: &[&str]) -> Vec<usize> {
    sentences.iter().map(|s| token_count(s)).collect()
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
