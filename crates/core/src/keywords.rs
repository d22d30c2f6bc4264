//! Keyword frequency ranking with stopword filtering.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::tokenize::tokenize;

/// Common English function words excluded from keyword ranking by default.
pub const DEFAULT_STOPWORDS: [&str; 22] = [
    "the", "and", "is", "in", "to", "a", "of", "that", "it", "on", "for", "with", "as", "this", "are", "an", "be", "by",
    "or", "we", "your", "you",
];

/// A set of words excluded from keyword ranking.
///
/// Matching is exact and case-insensitive: entries are stored lowercase and
/// compared against lowercase tokens.
///
/// # Example
///
/// ```rust
/// use seoscope_core::Stopwords;
///
/// let stopwords = Stopwords::new(["SEO", "rank"]);
/// assert!(stopwords.contains("seo"));
/// assert!(!Stopwords::default().contains("seo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates a stopword set from the given words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// An empty set; every token is eligible as a keyword.
    pub fn none() -> Self {
        Self { words: HashSet::new() }
    }

    /// Parses a stopword list: whitespace separated words, `#` starts a comment line.
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .flat_map(str::split_whitespace),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}

/// A ranked keyword and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub word: String,
    pub frequency: usize,
}

impl Keyword {
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self { word: word.into(), frequency }
    }
}

/// Returns the `top_n` most frequent non-stopword tokens of `text`.
///
/// Entries are sorted by descending frequency. Words with equal frequency keep
/// the order in which they first appear in the text.
pub fn keyword_frequency(text: &str, top_n: usize, stopwords: &Stopwords) -> Vec<Keyword> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, token) in tokenize(text).into_iter().enumerate() {
        if stopwords.contains(&token) {
            continue;
        }
        counts.entry(token).or_insert((position, 0)).1 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (first_seen, frequency))| (word, first_seen, frequency))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, _, frequency)| Keyword { word, frequency })
        .collect()
}
