pub mod analysis;
pub mod error;
pub mod input;
pub mod keywords;
pub mod metrics;
pub mod prompt;
pub mod report;
pub mod suggest;
pub mod tokenize;

pub use analysis::{Analysis, Analyzer, AnalyzerConfig, AnalyzerConfigBuilder, analyze};
pub use error::{Result, SeoscopeError};
pub use input::{read_file, read_source, read_stdin};
pub use keywords::{DEFAULT_STOPWORDS, Keyword, Stopwords, keyword_frequency};
pub use metrics::{
    Difficulty, LONG_SENTENCE_WORDS, Metrics, average_sentence_length, count_words, difficulty_estimate,
    long_sentences_count,
};
pub use prompt::{SYSTEM_MESSAGE, build_prompt, build_summary};
pub use report::Report;
#[cfg(feature = "remote")]
pub use suggest::request_suggestions;
pub use suggest::{
    Capability, DEFAULT_API_BASE, DEFAULT_MODEL, FALLBACK_SUGGESTIONS, MOCK_SUGGESTIONS, MockReason, SuggestionConfig,
    SuggestionConfigBuilder, SuggestionSource, Suggestions, suggest,
};
pub use tokenize::{split_sentences, tokenize};
