/// Configuration for a chat-completion model invocation.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"gpt-4.1-mini"`).
/// - `endpoint`: Base URL of the OpenAI-compatible API (without `/v1/...`).
/// - `api_key`: Bearer token sent with every request.
/// - `max_tokens`: Maximum number of tokens to generate (if set).
/// - `temperature`: Controls randomness (0.0 = deterministic).
/// - `timeout_secs`: Request timeout in seconds.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_model_config::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gpt-4.1-mini".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: "sk-...".to_string(),
///     max_tokens: None,
///     temperature: Some(0.4),
///     timeout_secs: 60,
/// };
/// assert_eq!(cfg.model, "gpt-4.1-mini");
/// ```
#[derive(Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// API base URL (e.g. `https://api.openai.com`).
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Request timeout (in seconds).
    pub timeout_secs: u64,
}

// Manual impl keeps the key out of logs.
impl std::fmt::Debug for LlmModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmModelConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
