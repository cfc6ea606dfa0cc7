use ai_llm_service::AiLlmError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use materials_service::MaterialsError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::core::app_config::ConfigError;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    #[error("materials client setup failed")]
    MaterialsSetup(#[source] MaterialsError),

    #[error("LLM client setup failed")]
    LlmSetup(#[source] AiLlmError),

    // --- Request / routing ---
    #[error("{0}")]
    BadRequest(String),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },

    /// Anything else; surfaced as 500 with the stringified cause.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Config(_)
            | AppError::Bind(_)
            | AppError::Server(_)
            | AppError::MaterialsSetup(_)
            | AppError::LlmSetup(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { code, .. } => code,
            AppError::MaterialsSetup(_) | AppError::LlmSetup(_) | AppError::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.error_code(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Malformed or mistyped JSON bodies are client errors.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

/// Upstream failures become 502 with the upstream detail; local faults are 500.
impl From<MaterialsError> for AppError {
    fn from(err: MaterialsError) -> Self {
        if err.is_upstream() {
            AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "MATERIALS_UPSTREAM_ERROR",
                message: err.to_string(),
            }
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl From<AiLlmError> for AppError {
    fn from(err: AiLlmError) -> Self {
        if err.is_upstream() {
            AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "LLM_UPSTREAM_ERROR",
                message: err.to_string(),
            }
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use ai_llm_service::error_handler::{ConfigError as LlmConfigError, ProviderError};

    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            AppError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let upstream = AppError::from(MaterialsError::InvalidResponse("no data".into()));
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream.error_code(), "MATERIALS_UPSTREAM_ERROR");

        let llm = AppError::from(AiLlmError::from(ProviderError::EmptyChoices));
        assert_eq!(llm.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(llm.error_code(), "LLM_UPSTREAM_ERROR");

        let local = AppError::from(AiLlmError::from(LlmConfigError::EmptyModel));
        assert_eq!(local.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
