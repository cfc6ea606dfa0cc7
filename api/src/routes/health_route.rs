use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthzResponse {
    pub ok: bool,
}

/// Handler: GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        message: "Materials Explainer backend running",
    })
}

/// Handler: GET /healthz
///
/// Liveness only; external services are not probed.
pub async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse { ok: true })
}
