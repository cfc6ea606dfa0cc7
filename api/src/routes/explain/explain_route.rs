//! POST /api/explain: asks the LLM to explain one materials record.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::explain::explain_request::{ExplainRequest, ExplainResponse},
};

/// Handler: POST /api/explain
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/explain \
///   -H 'content-type: application/json' \
///   -d '{"raw_data":{"band_gap":1.1},"question":"Is this a semiconductor?"}'
/// ```
#[instrument(name = "explain_route", skip_all)]
pub async fn explain_material(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> AppResult<Json<ExplainResponse>> {
    let Json(body) = payload?;

    debug!(
        fields = body.raw_data.len(),
        has_question = body.question.is_some(),
        "explain_route: start"
    );

    let answer = state
        .explainer
        .explain(&body.raw_data, body.question.as_deref())
        .await?;

    Ok(Json(ExplainResponse { answer }))
}
