//! Human-readable report of an analysis run.

use std::fmt;

use crate::analysis::Analysis;
use crate::suggest::Suggestions;

const SEPARATOR: &str = "—";

/// Everything printed for one analyzed document, in presentation order.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Path of the analyzed document, or `-` for stdin.
    pub source: &'a str,
    pub analysis: &'a Analysis,
    /// Whether canned mock suggestions were requested or forced.
    pub mock_mode: bool,
    pub suggestions: &'a Suggestions,
}

impl<'a> Report<'a> {
    pub fn new(source: &'a str, analysis: &'a Analysis, mock_mode: bool, suggestions: &'a Suggestions) -> Self {
        Self { source, analysis, mock_mode, suggestions }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = &self.analysis.metrics;

        writeln!(f, "Reading content from: {}", self.source)?;

        writeln!(f, "\n--- Basic SEO Metrics ---")?;
        writeln!(f, "Word count: {}", metrics.total_words)?;
        writeln!(f, "Sentence count: {}", metrics.sentence_count)?;
        writeln!(f, "Average sentence length (words): {:.1}", metrics.average_sentence_length)?;
        writeln!(
            f,
            "Number of long sentences (>{} words): {}",
            self.analysis.long_sentence_threshold, metrics.long_sentences_count
        )?;
        writeln!(f, "Difficulty estimate: {}", metrics.difficulty_estimate)?;

        writeln!(f, "\nTop keywords:")?;
        if self.analysis.keywords.is_empty() {
            writeln!(f, "(none)")?;
        }
        for (rank, keyword) in self.analysis.keywords.iter().enumerate() {
            writeln!(f, "{}. {} {} {}", rank + 1, keyword.word, SEPARATOR, keyword.frequency)?;
        }

        writeln!(f, "\nSending summary to LLM (mock mode = {})...", self.mock_mode)?;

        writeln!(f, "\n--- SEO Improvement Suggestions ---")?;
        writeln!(f, "{}", self.suggestions.text)
    }
}
