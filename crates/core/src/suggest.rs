//! SEO suggestions from a chat-completion model, with canned fallbacks.
//!
//! Which path runs is decided once, up front, by [`Capability::resolve`]:
//! either canned mock text is returned, or exactly one completion request is
//! made. A failed request never surfaces as an error from [`suggest`]; the
//! failure is recorded in [`SuggestionSource::Fallback`] and the fallback text
//! is used instead.

#[cfg(feature = "remote")]
use std::time::Duration;

#[cfg(feature = "remote")]
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::prompt::SYSTEM_MESSAGE;
use crate::{Result, SeoscopeError};

/// Default chat model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default base URL of the chat-completion API.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Suggestions returned when mock mode is in effect.
pub const MOCK_SUGGESTIONS: &str = "- Use a clear H1 that includes your main keyword.\n\
- Add a short meta description (140-160 chars) containing the keyword.\n\
- Use the top 3 keywords naturally in the first 100 words.\n\
- Break long paragraphs into smaller ones (2-3 sentences each).\n\
- Add subheadings (H2/H3) to organize content and include related keywords.\n\
- Include internal links to related pages and at least one external reference.";

/// Suggestions returned when a completion request was attempted and failed.
pub const FALLBACK_SUGGESTIONS: &str = "- (Fallback) Use a clear H1 with the main keyword.\n\
- (Fallback) Add a meta description (140-160 chars).\n\
- (Fallback) Use keywords in the first 100 words.\n\
- (Fallback) Shorten long sentences and add subheadings.";

/// Settings for the completion request.
///
/// # Example
///
/// ```rust
/// use seoscope_core::SuggestionConfig;
///
/// let config = SuggestionConfig::builder()
///     .api_key("sk-test")
///     .model("gpt-4o-mini")
///     .timeout(10)
///     .build();
/// assert_eq!(config.max_tokens, 300);
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// API credential; `None` or empty forces mock mode.
    pub api_key: Option<String>,

    /// Chat model identifier (default: `gpt-3.5-turbo`).
    pub model: String,

    /// Base URL of the API; `/chat/completions` is appended.
    pub api_base: String,

    /// Completion token budget (default: 300).
    pub max_tokens: u32,

    /// Sampling temperature (default: 0.7).
    pub temperature: f32,

    /// Request timeout in seconds (default: 30).
    pub timeout: u64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            max_tokens: 300,
            temperature: 0.7,
            timeout: 30,
        }
    }
}

impl SuggestionConfig {
    pub fn builder() -> SuggestionConfigBuilder {
        SuggestionConfigBuilder::new()
    }

    /// True when a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// Full URL of the chat-completion endpoint.
    pub fn endpoint(&self) -> Result<Url> {
        let base = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        Url::parse(&base).map_err(|e| SeoscopeError::InvalidConfig(format!("invalid API base URL: {e}")))
    }
}

/// Builder for SuggestionConfig.
pub struct SuggestionConfigBuilder {
    config: SuggestionConfig,
}

impl SuggestionConfigBuilder {
    pub fn new() -> Self {
        Self { config: SuggestionConfig::default() }
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.config.api_key = Some(value.into());
        self
    }

    pub fn model(mut self, value: impl Into<String>) -> Self {
        self.config.model = value.into();
        self
    }

    pub fn api_base(mut self, value: impl Into<String>) -> Self {
        self.config.api_base = value.into();
        self
    }

    pub fn max_tokens(mut self, value: u32) -> Self {
        self.config.max_tokens = value;
        self
    }

    pub fn temperature(mut self, value: f32) -> Self {
        self.config.temperature = value;
        self
    }

    pub fn timeout(mut self, value: u64) -> Self {
        self.config.timeout = value;
        self
    }

    pub fn build(self) -> SuggestionConfig {
        self.config
    }
}

impl Default for SuggestionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Why mock suggestions are used instead of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockReason {
    /// Mock mode was explicitly requested.
    Requested,
    /// No API key is configured.
    MissingApiKey,
    /// Built without the `remote` feature.
    RemoteUnavailable,
}

impl MockReason {
    pub fn describe(&self) -> &'static str {
        match self {
            MockReason::Requested => "requested",
            MockReason::MissingApiKey => "no API key configured",
            MockReason::RemoteUnavailable => "remote provider not available in this build",
        }
    }
}

/// How suggestions will be obtained for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Mock(MockReason),
    Remote,
}

impl Capability {
    /// Decides between mock and remote suggestions.
    ///
    /// Checks, in order: an explicit mock request, availability of the remote
    /// provider in this build, and presence of an API key.
    pub fn resolve(mock_requested: bool, config: &SuggestionConfig) -> Self {
        if mock_requested {
            Capability::Mock(MockReason::Requested)
        } else if !cfg!(feature = "remote") {
            Capability::Mock(MockReason::RemoteUnavailable)
        } else if !config.has_api_key() {
            Capability::Mock(MockReason::MissingApiKey)
        } else {
            Capability::Remote
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Capability::Mock(_))
    }
}

/// Where a suggestion text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionSource {
    Mock(MockReason),
    Remote,
    /// A remote call was attempted and failed for `reason`.
    Fallback { reason: String },
}

/// Suggestion text together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub text: String,
    pub source: SuggestionSource,
}

impl Suggestions {
    pub fn mock(reason: MockReason) -> Self {
        Self { text: MOCK_SUGGESTIONS.to_string(), source: SuggestionSource::Mock(reason) }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self { text: FALLBACK_SUGGESTIONS.to_string(), source: SuggestionSource::Fallback { reason: reason.into() } }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, SuggestionSource::Fallback { .. })
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

impl<'a> ChatRequest<'a> {
    fn new(prompt: &'a str, config: &'a SuggestionConfig) -> Self {
        Self {
            model: &config.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_MESSAGE },
                ChatMessage { role: "user", content: prompt },
            ],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Extracts the trimmed text of the first choice from a completion response body.
fn completion_text(body: &str) -> Result<String> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| SeoscopeError::MalformedResponse(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| SeoscopeError::MalformedResponse("no completion choices".to_string()))?;

    let text = content.trim();
    if text.is_empty() {
        return Err(SeoscopeError::MalformedResponse("empty completion".to_string()));
    }
    Ok(text.to_string())
}

/// Pulls a readable message out of an error response body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().chars().take(200).collect())
}

/// Sends one chat-completion request and returns the completion text.
///
/// No retries are made. Every failure, from connection errors to an
/// unexpected response schema, is returned as an error.
#[cfg(feature = "remote")]
pub async fn request_suggestions(prompt: &str, config: &SuggestionConfig) -> Result<String> {
    let endpoint = config.endpoint()?;
    let api_key = config
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| SeoscopeError::InvalidConfig("missing API key".to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SeoscopeError::HttpError)?;

    tracing::debug!(model = %config.model, endpoint = %endpoint, "requesting completion");

    let response = client
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&ChatRequest::new(prompt, config))
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SeoscopeError::Timeout { timeout: config.timeout }
            } else {
                SeoscopeError::HttpError(e)
            }
        })?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(SeoscopeError::ApiError { status: status.as_u16(), message: api_error_message(&body) });
    }

    completion_text(&body)
}

/// Produces suggestions for `prompt` according to `capability`.
///
/// Always returns suggestion text. A failed remote call yields
/// [`FALLBACK_SUGGESTIONS`] with the failure recorded in the source.
pub async fn suggest(prompt: &str, capability: Capability, config: &SuggestionConfig) -> Suggestions {
    match capability {
        Capability::Mock(reason) => {
            tracing::debug!(reason = reason.describe(), "using mock suggestions");
            Suggestions::mock(reason)
        }
        Capability::Remote => remote_suggestions(prompt, config).await,
    }
}

#[cfg(feature = "remote")]
async fn remote_suggestions(prompt: &str, config: &SuggestionConfig) -> Suggestions {
    match request_suggestions(prompt, config).await {
        Ok(text) => Suggestions { text, source: SuggestionSource::Remote },
        Err(e) => {
            tracing::warn!(error = %e, "suggestion request failed, using fallback suggestions");
            Suggestions::fallback(e.to_string())
        }
    }
}

#[cfg(not(feature = "remote"))]
async fn remote_suggestions(_prompt: &str, _config: &SuggestionConfig) -> Suggestions {
    Suggestions::mock(MockReason::RemoteUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_config_default() {
        let config = SuggestionConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.temperature, 0.7);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = SuggestionConfig::builder().api_key("   ").build();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_endpoint() {
        let config = SuggestionConfig::builder().api_base("http://localhost:8080/v1/").build();
        assert_eq!(config.endpoint().unwrap().as_str(), "http://localhost:8080/v1/chat/completions");

        let config = SuggestionConfig::builder().api_base("not a url").build();
        assert!(matches!(config.endpoint(), Err(SeoscopeError::InvalidConfig(_))));
    }

    #[test]
    fn test_resolve_mock_requested_wins() {
        let config = SuggestionConfig::builder().api_key("sk-test").build();
        assert_eq!(Capability::resolve(true, &config), Capability::Mock(MockReason::Requested));
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_resolve_without_api_key() {
        let config = SuggestionConfig::default();
        assert_eq!(Capability::resolve(false, &config), Capability::Mock(MockReason::MissingApiKey));
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_resolve_remote() {
        let config = SuggestionConfig::builder().api_key("sk-test").build();
        assert_eq!(Capability::resolve(false, &config), Capability::Remote);
        assert!(!Capability::Remote.is_mock());
    }

    #[test]
    fn test_mock_and_fallback_texts() {
        assert_eq!(MOCK_SUGGESTIONS.lines().count(), 6);
        assert_eq!(FALLBACK_SUGGESTIONS.lines().count(), 4);
        assert!(MOCK_SUGGESTIONS.lines().all(|l| l.starts_with("- ")));
        assert!(FALLBACK_SUGGESTIONS.lines().all(|l| l.starts_with("- (Fallback)")));
    }

    #[test]
    fn test_chat_request_shape() {
        let config = SuggestionConfig::default();
        let value = serde_json::to_value(ChatRequest::new("analyze this", &config)).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["max_tokens"], 300);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], SYSTEM_MESSAGE);
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "analyze this");
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_completion_text() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  - Add an H1.\n"}}]}"#;
        assert_eq!(completion_text(body).unwrap(), "- Add an H1.");
    }

    #[test]
    fn test_completion_text_malformed() {
        assert!(matches!(completion_text("not json"), Err(SeoscopeError::MalformedResponse(_))));
        assert!(matches!(
            completion_text(r#"{"choices":[]}"#),
            Err(SeoscopeError::MalformedResponse(_))
        ));
        assert!(matches!(
            completion_text(r#"{"choices":[{"message":{"content":"   "}}]}"#),
            Err(SeoscopeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(api_error_message(body), "Incorrect API key provided");
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_suggest_mock_never_calls_remote() {
        let config = SuggestionConfig::builder()
            .api_key("sk-test")
            .api_base("http://127.0.0.1:9/v1")
            .build();
        let suggestions = suggest("prompt", Capability::Mock(MockReason::Requested), &config).await;
        assert_eq!(suggestions.text, MOCK_SUGGESTIONS);
        assert_eq!(suggestions.source, SuggestionSource::Mock(MockReason::Requested));
    }

    #[cfg(feature = "remote")]
    #[tokio::test]
    async fn test_suggest_remote_failure_falls_back() {
        let config = SuggestionConfig::builder()
            .api_key("sk-test")
            .api_base("http://127.0.0.1:9/v1")
            .timeout(5)
            .build();
        let suggestions = suggest("prompt", Capability::Remote, &config).await;
        assert_eq!(suggestions.text, FALLBACK_SUGGESTIONS);
        assert!(suggestions.is_fallback());
    }

    #[cfg(feature = "remote")]
    #[tokio::test]
    async fn test_request_suggestions_invalid_base() {
        let config = SuggestionConfig::builder().api_key("sk-test").api_base("::nope::").build();
        let result = request_suggestions("prompt", &config).await;
        assert!(matches!(result, Err(SeoscopeError::InvalidConfig(_))));
    }
}
