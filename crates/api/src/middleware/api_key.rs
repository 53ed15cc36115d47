//! Static API key check applied to the whole router.
//!
//! Disabled when no key is configured. Preflight `OPTIONS` requests and the
//! documentation/root paths are always let through.

use artworks_core::error::CoreError;
use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths that never require the key.
pub const EXEMPT_PATHS: &[&str] = &["/", "/health", "/openapi.json", "/docs", "/redoc"];

/// Whether `path` is served without an API key.
pub fn is_exempt(path: &str) -> bool {
    EXEMPT_PATHS.contains(&path)
}

/// Reject requests whose `X-API-Key` does not equal the configured key.
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    if request.method() == Method::OPTIONS || is_exempt(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided != Some(expected) {
        tracing::debug!(path = %request.uri().path(), "Rejected request with bad API key");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or missing API key".into(),
        )));
    }

    Ok(next.run(request).await)
}
