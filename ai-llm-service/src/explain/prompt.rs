//! Prompt construction for explaining a Materials Project record.

use serde_json::{Map, Value};

use crate::error_handler::AiLlmError;

/// Persona and task given to the model as the system message.
pub const SYSTEM_PROMPT: &str = "You are a materials scientist. \
Explain Materials Project JSON data to a smart non-expert. \
Use clear language, but keep the scientific meaning accurate. \
Briefly explain what the key properties imply (e.g. band gap, stability). \
If the user asks a follow-up question, answer using the JSON context.";

/// Appended when the caller did not ask anything specific.
pub const DEFAULT_INSTRUCTION: &str = "Explain the most important properties, \
their approximate numerical values, and what they mean.";

const ENTRY_HEADER: &str = "Here is a materials JSON entry:\n\n";

/// The two messages sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainPrompt {
    pub system: &'static str,
    pub user: String,
}

/// Builds the user message: header, pretty JSON block, then either the
/// question or [`DEFAULT_INSTRUCTION`]. An empty question counts as absent;
/// any other text, whitespace included, is appended as given.
///
/// # Errors
/// Returns [`AiLlmError::Serialize`] if the record cannot be rendered.
pub fn build_prompt(
    raw_data: &Map<String, Value>,
    question: Option<&str>,
) -> Result<ExplainPrompt, AiLlmError> {
    let mut user = String::from(ENTRY_HEADER);
    user.push_str(&serde_json::to_string_pretty(raw_data)?);

    match question.filter(|q| !q.is_empty()) {
        Some(q) => {
            user.push_str("\n\nUser question: ");
            user.push_str(q);
            user.push('\n');
        }
        None => {
            user.push_str("\n\n");
            user.push_str(DEFAULT_INSTRUCTION);
        }
    }

    Ok(ExplainPrompt {
        system: SYSTEM_PROMPT,
        user,
    })
}
