//! Request extractors whose rejections use the uniform error body.
//!
//! axum's stock `Json`, `Path` and `Query` reject with plain-text bodies.
//! These wrappers route the rejection through [`AppError`] instead.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;

use crate::error::{AppError, MSG_BAD_REQUEST, MSG_NOT_FOUND, MSG_UNPROCESSABLE};

/// JSON request body. Malformed JSON is a 400, well-formed JSON of the wrong
/// shape is a 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A segment that does not parse (e.g. a non-integer id)
/// is treated as an unknown resource.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query-string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::Rejection {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: format!("{MSG_UNPROCESSABLE}: {}", err.body_text()),
            },
            other => {
                tracing::debug!(error = %other.body_text(), "Rejected JSON body");
                AppError::BadRequest(MSG_BAD_REQUEST.to_string())
            }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected path parameters");
        AppError::Rejection {
            status: StatusCode::NOT_FOUND,
            message: MSG_NOT_FOUND.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        AppError::BadRequest(MSG_BAD_REQUEST.to_string())
    }
}
