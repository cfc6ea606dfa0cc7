//! Explanation adapter: turns a materials record (plus an optional question)
//! into a two-message chat completion and returns the generated text.

pub mod prompt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error_handler::AiLlmError, explain::prompt::build_prompt,
    services::open_ai_service::OpenAiService,
};

/// Stateless explainer. Each call is a single, self-contained completion.
#[derive(Debug)]
pub struct MaterialsExplainer {
    llm: OpenAiService,
}

impl MaterialsExplainer {
    pub fn new(llm: OpenAiService) -> Self {
        Self { llm }
    }

    /// Asks the model to explain `raw_data`, answering `question` when given.
    ///
    /// # Errors
    /// Any [`AiLlmError`] from prompt serialization or the completion call.
    pub async fn explain(
        &self,
        raw_data: &Map<String, Value>,
        question: Option<&str>,
    ) -> Result<String, AiLlmError> {
        let prompt = build_prompt(raw_data, question)?;

        debug!(
            model = %self.llm.model(),
            fields = raw_data.len(),
            user_prompt_len = prompt.user.len(),
            "explaining materials record"
        );

        self.llm.generate(&prompt.user, Some(prompt.system)).await
    }
}
