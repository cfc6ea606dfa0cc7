use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::core::app_config::ConfigError;

/// Local frontend dev server, always allowed.
pub const DEV_ORIGIN: &str = "http://localhost:5173";

/// CORS for the browser frontend: credentials allowed, so methods and headers
/// mirror the preflight request instead of using `*`.
pub fn cors_layer(frontend_origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let mut origins = vec![HeaderValue::from_static(DEV_ORIGIN)];
    if let Some(origin) = frontend_origin {
        let value = HeaderValue::from_str(origin)
            .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))?;
        origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
