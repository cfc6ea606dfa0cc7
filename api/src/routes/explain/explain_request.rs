use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request payload for /api/explain.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    /// One Materials Project record, passed through untouched.
    pub raw_data: Map<String, Value>,
    /// Optional follow-up question about the record.
    #[serde(default)]
    pub question: Option<String>,
}

/// Response payload for /api/explain.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    /// Model answer (plain text).
    pub answer: String,
}
