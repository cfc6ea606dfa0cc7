//! Process-level configuration: listen address, browser origin, and the
//! settings for both outbound adapters.

use ai_llm_service::{AiLlmError, LlmModelConfig, config_openai_from};
use materials_service::{MaterialsConfig, MaterialsConfigError};
use thiserror::Error;

pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// Startup configuration failure. The process refuses to start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Materials(#[from] MaterialsConfigError),

    #[error(transparent)]
    Llm(#[from] AiLlmError),

    #[error("invalid FRONTEND_ORIGIN `{0}`: expected http(s)://host[:port]")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `host:port` to bind (`API_ADDRESS`).
    pub address: String,
    /// Deployed frontend allowed by CORS (`FRONTEND_ORIGIN`), if any.
    pub frontend_origin: Option<String>,
    pub materials: MaterialsConfig,
    pub llm: LlmModelConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let materials = MaterialsConfig::from_lookup(lookup)?;
        let llm = config_openai_from(lookup)?;

        let frontend_origin = var("FRONTEND_ORIGIN")
            .map(|o| o.trim_end_matches('/').to_string())
            .map(|o| {
                if o.starts_with("http://") || o.starts_with("https://") {
                    Ok(o)
                } else {
                    Err(ConfigError::InvalidOrigin(o))
                }
            })
            .transpose()?;

        Ok(Self {
            address: var("API_ADDRESS").unwrap_or_else(|| DEFAULT_API_ADDRESS.into()),
            frontend_origin,
            materials,
            llm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(name: &str) -> Option<String> {
        match name {
            "MP_API_KEY" => Some("mp-key".into()),
            "OPENAI_API_KEY" => Some("sk-key".into()),
            _ => None,
        }
    }

    #[test]
    fn both_keys_are_enough() {
        let cfg = AppConfig::from_lookup(&base).unwrap();
        assert_eq!(cfg.address, DEFAULT_API_ADDRESS);
        assert_eq!(cfg.frontend_origin, None);
        assert_eq!(cfg.materials.api_key, "mp-key");
        assert_eq!(cfg.llm.api_key, "sk-key");
    }

    #[test]
    fn each_key_is_required() {
        let no_mp = AppConfig::from_lookup(&|name| match name {
            "MP_API_KEY" => None,
            other => base(other),
        });
        assert!(matches!(no_mp, Err(ConfigError::Materials(_))));

        let no_llm = AppConfig::from_lookup(&|name| match name {
            "OPENAI_API_KEY" => None,
            other => base(other),
        });
        assert!(matches!(no_llm, Err(ConfigError::Llm(_))));
    }

    #[test]
    fn origin_and_address_overrides() {
        let cfg = AppConfig::from_lookup(&|name| match name {
            "FRONTEND_ORIGIN" => Some("https://someone.github.io/".into()),
            "API_ADDRESS" => Some("127.0.0.1:9000".into()),
            other => base(other),
        })
        .unwrap();
        assert_eq!(cfg.frontend_origin.as_deref(), Some("https://someone.github.io"));
        assert_eq!(cfg.address, "127.0.0.1:9000");

        let bad = AppConfig::from_lookup(&|name| match name {
            "FRONTEND_ORIGIN" => Some("someone.github.io".into()),
            other => base(other),
        });
        assert!(matches!(bad, Err(ConfigError::InvalidOrigin(_))));
    }
}
