//! Library API integration tests
use seoscope_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    read_file(&get_fixture_path(name)).expect("fixture should exist")
}

#[test]
fn test_end_to_end_basic() {
    let text = read_fixture("seo_basic.txt");
    let analysis = Analyzer::with_config(AnalyzerConfig::builder().top_n(2).build()).analyze(&text);

    assert_eq!(analysis.metrics.total_words, 9);
    assert_eq!(analysis.metrics.sentence_count, 3);
    assert_eq!(analysis.metrics.average_sentence_length, 3.0);
    assert_eq!(analysis.metrics.long_sentences_count, 0);
    assert_eq!(analysis.metrics.difficulty_estimate, Difficulty::Easy);
    assert_eq!(analysis.keywords, vec![Keyword::new("seo", 3), Keyword::new("helps", 2)]);
}

#[test]
fn test_end_to_end_empty() {
    let text = read_fixture("empty.txt");
    let analysis = analyze(&text);

    assert_eq!(analysis.metrics.total_words, 0);
    assert_eq!(analysis.metrics.sentence_count, 0);
    assert_eq!(analysis.metrics.average_sentence_length, 0.0);
    assert_eq!(analysis.metrics.difficulty_estimate, Difficulty::Easy);
    assert!(analysis.keywords.is_empty());
}

#[test]
fn test_long_sentences_fixture() {
    let text = read_fixture("long_sentences.txt");
    let analysis = analyze(&text);

    assert_eq!(analysis.metrics.sentence_count, 3);
    assert_eq!(analysis.metrics.long_sentences_count, 3);
    assert_eq!(analysis.metrics.difficulty_estimate, Difficulty::Hard);
}

#[test]
fn test_unicode_fixture() {
    let text = read_fixture("unicode_heavy.txt");
    let analysis = analyze(&text);

    assert_eq!(analysis.keywords[0], Keyword::new("café", 3));
    assert!(tokenize(&text).contains(&"überblick".to_string()));
}

#[test]
fn test_custom_stopwords_fixture() {
    let stopwords = Stopwords::parse(&read_fixture("stopwords.txt"));
    let text = read_fixture("seo_basic.txt");

    let keywords = keyword_frequency(&text, 8, &stopwords);
    assert_eq!(keywords[0], Keyword::new("helps", 2));
    assert!(keywords.iter().all(|k| k.word != "seo"));
}

#[test]
fn test_count_words_matches_tokenize() {
    for name in ["seo_basic.txt", "empty.txt", "long_sentences.txt", "unicode_heavy.txt"] {
        let text = read_fixture(name);
        assert_eq!(count_words(&text), tokenize(&text).len(), "{name}");
    }
}

#[test]
fn test_split_sentences_without_punctuation() {
    assert_eq!(split_sentences("a heading without a full stop\n"), vec!["a heading without a full stop"]);
}

#[test]
fn test_missing_file_is_fatal() {
    let result = read_file(&get_fixture_path("does_not_exist.txt"));
    assert!(matches!(result, Err(SeoscopeError::FileNotFound(_))));
}

#[test]
fn test_prompt_contains_summary() {
    let analysis = analyze(&read_fixture("seo_basic.txt"));
    let prompt = analysis.prompt();

    assert!(prompt.contains("Word count: 9."));
    assert!(prompt.contains("Top keywords: seo, helps, great, websites, rank."));
    assert!(prompt.contains("Average sentence length: 3.0."));
    assert!(prompt.contains("Long sentences: 0."));
}

#[tokio::test]
async fn test_mock_mode_returns_mock_text() {
    let config = SuggestionConfig::builder().api_key("sk-test").build();
    let capability = Capability::resolve(true, &config);
    let suggestions = suggest("prompt", capability, &config).await;

    assert!(capability.is_mock());
    assert_eq!(suggestions.text, MOCK_SUGGESTIONS);
}

#[cfg(feature = "remote")]
#[tokio::test]
async fn test_remote_failure_yields_fallback_report() {
    let analysis = analyze(&read_fixture("seo_basic.txt"));
    let config = SuggestionConfig::builder()
        .api_key("sk-test")
        .api_base("http://127.0.0.1:9/v1")
        .timeout(5)
        .build();
    let capability = Capability::resolve(false, &config);
    assert_eq!(capability, Capability::Remote);

    let suggestions = suggest(&analysis.prompt(), capability, &config).await;
    assert_eq!(suggestions.text, FALLBACK_SUGGESTIONS);
    assert!(matches!(suggestions.source, SuggestionSource::Fallback { .. }));

    let report = Report::new("seo_basic.txt", &analysis, capability.is_mock(), &suggestions).to_text();
    assert!(report.contains("Word count: 9"));
    assert!(report.ends_with(&format!("{FALLBACK_SUGGESTIONS}\n")));
}
