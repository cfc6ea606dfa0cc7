//! POST /api/materials: proxies a summary search to Materials Project.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use materials_service::{MAX_LIMIT, SearchCriterion, SummarySearch};
use tracing::{debug, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::materials::materials_request::{MaterialsRequest, MaterialsResponse},
};

/// Handler: POST /api/materials
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/materials \
///   -H 'content-type: application/json' \
///   -d '{"chemsys":"Li-Fe-O","limit":5}'
/// ```
#[instrument(name = "materials_route", skip_all)]
pub async fn search_materials(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<MaterialsRequest>, JsonRejection>,
) -> AppResult<Json<MaterialsResponse>> {
    if let Some(id) = headers.get("X-Request-Id").and_then(|h| h.to_str().ok()) {
        debug!(%id, "request id attached");
    }

    let Json(body) = payload?;

    let criterion = SearchCriterion::from_parts(body.chemsys.as_deref(), body.formula.as_deref())
        .ok_or_else(|| AppError::BadRequest("Provide chemsys or formula".into()))?;

    if !(1..=MAX_LIMIT).contains(&body.limit) {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let search = SummarySearch::new(criterion, body.limit);
    let data = state.materials.search(&search).await?;

    debug!(hits = data.len(), limit = body.limit, "materials_route: success");

    Ok(Json(MaterialsResponse { data }))
}
