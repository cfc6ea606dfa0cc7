//! Chat-completion client and the materials explanation adapter built on it.

pub mod config;
pub mod error_handler;
pub mod explain;
pub mod services;

pub use config::default_config::config_openai_from;
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::AiLlmError;
pub use explain::MaterialsExplainer;
pub use services::open_ai_service::OpenAiService;
