//! Default LLM config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`     = bearer token (mandatory)
//! - `OPENAI_URL`         = API base URL (default `https://api.openai.com`)
//! - `OPENAI_MODEL`       = model identifier (default `gpt-4.1-mini`)
//! - `OPENAI_TEMPERATURE` = sampling temperature in `0.0..=2.0` (default `0.4`)
//! - `LLM_MAX_TOKENS`     = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS`   = request timeout in seconds (default `60`)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        AiLlmError, ConfigError, VarLookup, must_var, opt_var, validate_http_endpoint,
        validate_range_f32, var_f32_or, var_opt_u32, var_u64_or,
    },
};

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Constructs the explanation model config from an arbitrary variable lookup.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is missing
/// - [`ConfigError::InvalidFormat`] if `OPENAI_URL` is not http(s)
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad numbers
/// - [`ConfigError::EmptyModel`] if `OPENAI_MODEL` is set to whitespace only
pub fn config_openai_from(lookup: VarLookup<'_>) -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_var(lookup, "OPENAI_API_KEY")?;

    let endpoint = opt_var(lookup, "OPENAI_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.into());
    validate_http_endpoint("OPENAI_URL", &endpoint)?;

    let model = match lookup("OPENAI_MODEL") {
        Some(m) if m.trim().is_empty() => return Err(ConfigError::EmptyModel.into()),
        Some(m) => m.trim().to_string(),
        None => DEFAULT_OPENAI_MODEL.into(),
    };

    let temperature = var_f32_or(lookup, "OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?;
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;

    let max_tokens = var_opt_u32(lookup, "LLM_MAX_TOKENS")?;
    let timeout_secs = var_u64_or(lookup, "LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

    Ok(LlmModelConfig {
        model,
        endpoint: endpoint.trim().to_string(),
        api_key: api_key.trim().to_string(),
        max_tokens,
        temperature: Some(temperature),
        timeout_secs,
    })
}
