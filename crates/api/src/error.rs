use artworks_core::error::CoreError;
use artworks_db::DbError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::ErrorBody;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for store errors,
/// and adds HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `artworks_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the artwork store.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Field-level validation failures on a request DTO.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A query string that does not deserialize into the handler's params.
    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),

    /// A missing, malformed or mistyped JSON body.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id '{id}' not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Store errors ---
            AppError::Database(err) => classify_db_error(err),

            // --- HTTP-specific errors ---
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors.to_string(),
            ),
            AppError::Query(rejection) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", rejection.body_text())
            }
            AppError::Json(rejection) => classify_json_rejection(rejection),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = ErrorBody {
            error: message,
            code: code.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Keep axum's status for a body rejection (400, 413, 415 or 422) and give
/// it a matching error code.
fn classify_json_rejection(rejection: &JsonRejection) -> (StatusCode, &'static str, String) {
    let status = rejection.status();
    let code = match status {
        StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        _ => "BAD_REQUEST",
    };
    (status, code, rejection.body_text())
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - Unique id violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    if err.is_duplicate_key() {
        return (
            StatusCode::CONFLICT,
            "CONFLICT",
            "An artwork with this id already exists".to_string(),
        );
    }
    tracing::error!(error = %err, "Database error");
    internal_error()
}
