//! Main analysis API.
//!
//! [`Analyzer`] runs the rule-based part of the pipeline: tokenization,
//! readability metrics and keyword ranking. Analysis cannot fail; empty text
//! produces zero counts and an empty keyword table.
//!
//! # Example
//!
//! ```rust
//! use seoscope_core::{Analyzer, AnalyzerConfig};
//!
//! let config = AnalyzerConfig::builder().top_n(2).build();
//! let analysis = Analyzer::with_config(config).analyze("SEO is great. SEO helps. SEO helps websites rank.");
//!
//! assert_eq!(analysis.metrics.total_words, 9);
//! assert_eq!(analysis.keywords[0].word, "seo");
//! ```

use crate::keywords::{Keyword, Stopwords, keyword_frequency};
use crate::metrics::{LONG_SENTENCE_WORDS, Metrics};
use crate::prompt::{SUMMARY_KEYWORDS, build_prompt, build_summary};

/// Configuration for an [`Analyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Maximum number of ranked keywords (default: 8).
    pub top_n: usize,

    /// Sentences with more tokens than this are long (default: 20).
    pub long_sentence_threshold: usize,

    /// Number of keywords named in the prompt summary (default: 5).
    pub summary_keywords: usize,

    /// Words excluded from keyword ranking (default: [`Stopwords::default`]).
    pub stopwords: Stopwords,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: 8,
            long_sentence_threshold: LONG_SENTENCE_WORDS,
            summary_keywords: SUMMARY_KEYWORDS,
            stopwords: Stopwords::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
///
/// # Example
///
/// ```rust
/// use seoscope_core::{AnalyzerConfig, Stopwords};
///
/// let config = AnalyzerConfig::builder()
///     .top_n(3)
///     .stopwords(Stopwords::none())
///     .build();
/// assert!(config.stopwords.is_empty());
/// ```
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Sets the maximum number of ranked keywords.
    pub fn top_n(mut self, value: usize) -> Self {
        self.config.top_n = value;
        self
    }

    /// Sets the token count above which a sentence is long.
    pub fn long_sentence_threshold(mut self, value: usize) -> Self {
        self.config.long_sentence_threshold = value;
        self
    }

    /// Sets how many keywords the prompt summary names.
    pub fn summary_keywords(mut self, value: usize) -> Self {
        self.config.summary_keywords = value;
        self
    }

    /// Replaces the stopword set.
    pub fn stopwords(mut self, value: Stopwords) -> Self {
        self.config.stopwords = value;
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of analyzing one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub metrics: Metrics,
    pub keywords: Vec<Keyword>,
    /// One-line summary of the metrics and leading keywords.
    pub summary: String,
    /// Token count above which a sentence was counted as long.
    pub long_sentence_threshold: usize,
}

impl Analysis {
    /// Builds the model prompt embedding this analysis' summary.
    pub fn prompt(&self) -> String {
        build_prompt(&self.summary)
    }
}

/// Rule-based text analyzer.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Computes metrics, keywords and the summary for `text`.
    pub fn analyze(&self, text: &str) -> Analysis {
        let metrics = Metrics::compute(text, self.config.long_sentence_threshold);
        let keywords = keyword_frequency(text, self.config.top_n, &self.config.stopwords);
        let summary = build_summary(&metrics, &keywords, self.config.summary_keywords);

        tracing::debug!(
            words = metrics.total_words,
            sentences = metrics.sentence_count,
            keywords = keywords.len(),
            "analyzed document"
        );

        Analysis { metrics, keywords, summary, long_sentence_threshold: self.config.long_sentence_threshold }
    }
}

/// Analyzes `text` with the default configuration.
pub fn analyze(text: &str) -> Analysis {
    Analyzer::new().analyze(text)
}
