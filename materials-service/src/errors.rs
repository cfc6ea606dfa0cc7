//! Crate-wide error hierarchy for materials-service.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type MaterialsResult<T> = Result<T, MaterialsError>;

/// Root error type for the materials-service crate.
#[derive(Debug, Error)]
pub enum MaterialsError {
    /// Configuration problems (missing key, bad base URL, etc.).
    #[error(transparent)]
    Config(#[from] MaterialsConfigError),

    /// Materials Project answered with a non-2xx status.
    #[error("Materials Project returned HTTP {status} for {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// Message extracted from the response body.
        snippet: String,
    },

    /// Body was not JSON or lacked the `data` envelope.
    #[error("unexpected response from Materials Project: {0}")]
    InvalidResponse(String),

    /// Request did not finish within the configured timeout.
    #[error("Materials Project request timed out after {0:?}")]
    Timeout(Duration),

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("Materials Project network error: {0}")]
    Network(#[source] reqwest::Error),

    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl MaterialsError {
    /// `true` when the remote service (or the path to it) is at fault.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            MaterialsError::HttpStatus { .. }
                | MaterialsError::InvalidResponse(_)
                | MaterialsError::Timeout(_)
                | MaterialsError::Network(_)
        )
    }
}

/// Configuration errors raised while loading [`crate::config::MaterialsConfig`].
#[derive(Debug, Error)]
pub enum MaterialsConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    #[error("invalid format in {var}: {reason}")]
    InvalidFormat {
        var: &'static str,
        reason: &'static str,
    },

    #[error("API key contains characters not allowed in headers")]
    InvalidApiKey,
}

const MESSAGE_MAX_CHARS: usize = 300;

/// Extracts a human-readable message from a Materials Project error body.
///
/// The API answers failures with `{"detail": ...}` (or `{"message": ...}`
/// from the gateway in front of it). Anything else falls back to the first
/// non-empty line of the raw body.
pub(crate) fn upstream_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        ["detail", "message"]
            .iter()
            .find_map(|k| v.get(*k).and_then(Value::as_str).map(str::to_owned))
    });

    let msg = from_json.unwrap_or_else(|| {
        body.lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or_default()
            .to_owned()
    });

    match msg.char_indices().nth(MESSAGE_MAX_CHARS) {
        Some((cut, _)) => format!("{}…", &msg[..cut]),
        None => msg,
    }
}
