use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use classroom_core::error::CoreError;
use serde_json::json;

/// Message for every 400 response that carries no more specific detail.
pub const MSG_BAD_REQUEST: &str = "Bad request";
/// Message for every 404 response.
pub const MSG_NOT_FOUND: &str = "Resource not found";
/// Message for every 405 response.
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
/// Prefix of every 422 response; validation detail is appended.
pub const MSG_UNPROCESSABLE: &str = "Unprocessable entity";
/// Message for every 500 response.
pub const MSG_INTERNAL: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform
/// `{ "success": false, "error": <status>, "message": <text> }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `classroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route, or no resource behind a route, matched the request.
    #[error("Resource not found")]
    NotFound,

    /// The path exists but not for this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// An extractor rejected the request before the handler ran.
    #[error("Request rejected ({status}): {message}")]
    Rejection { status: StatusCode, message: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string())
                }
                CoreError::Validation(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("{MSG_UNPROCESSABLE}: {msg}"),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                MSG_METHOD_NOT_ALLOWED.to_string(),
            ),
            AppError::Rejection { status, message } => (*status, message.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }
        };

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign-key, unique, check and not-null violations map to 422.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string()),
        sqlx::Error::Database(db_err) => {
            let detail = match db_err.code().as_deref() {
                Some("23503") => Some("referenced row does not exist"),
                Some("23505") => Some("duplicate value"),
                Some("23514") => Some("value out of range"),
                Some("23502") => Some("missing required value"),
                _ => None,
            };
            if let Some(detail) = detail {
                let constraint = db_err.constraint().unwrap_or("unknown");
                tracing::debug!(constraint, error = %db_err, "Constraint violation");
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("{MSG_UNPROCESSABLE}: {detail} ({constraint})"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
    }
}
