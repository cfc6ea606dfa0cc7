use ai_llm_service::{LlmModelConfig, MaterialsExplainer, OpenAiService};
use materials_service::{MaterialsConfig, MaterialsProjectClient};
use tracing::info;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers. Immutable after startup.
#[derive(Debug)]
pub struct AppState {
    /// Materials Project summary search.
    pub materials: MaterialsProjectClient,
    /// LLM-backed explanation of a single record.
    pub explainer: MaterialsExplainer,
}

impl AppState {
    /// Builds both outbound clients once.
    pub fn new(materials: &MaterialsConfig, llm: LlmModelConfig) -> Result<Self, AppError> {
        let materials_client =
            MaterialsProjectClient::new(materials).map_err(AppError::MaterialsSetup)?;
        let llm_client = OpenAiService::new(llm).map_err(AppError::LlmSetup)?;

        info!(
            materials_base = %materials.base_url,
            model = %llm_client.model(),
            "application state initialized"
        );

        Ok(Self {
            materials: materials_client,
            explainer: MaterialsExplainer::new(llm_client),
        })
    }
}
