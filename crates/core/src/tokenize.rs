//! Word and sentence tokenization.
//!
//! Words are maximal runs of Unicode word characters (letters, digits, marks,
//! connector punctuation such as `_`), case-folded to lowercase. Everything
//! else is a separator. Sentences are the trimmed, non-empty pieces left after
//! splitting on runs of `.`, `!` and `?`.

use std::sync::LazyLock;

use regex::Regex;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

static SENTENCE_BOUNDARY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Splits `text` into lowercase word tokens, in document order.
///
/// No minimum length filter is applied, so single letters and digits count.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of word tokens in `text` without allocating the tokens.
pub fn token_count(text: &str) -> usize {
    WORD_REGEX.find_iter(&text.to_lowercase()).count()
}

/// Splits `text` into trimmed, non-empty sentences, in document order.
///
/// Text without terminal punctuation yields at most one sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY_REGEX
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
