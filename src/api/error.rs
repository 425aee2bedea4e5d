//! API error responses

use crate::signal::RejectReason;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors returned to HTTP callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be decoded
    #[error("bad json")]
    BadJson(#[source] serde_json::Error),
    /// Match failed input filtering
    #[error("{0}")]
    Rejected(#[from] RejectReason),
    /// Route exists but not for this method
    #[error("method not allowed")]
    MethodNotAllowed,
    /// No such route
    #[error("not_found")]
    NotFound,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadJson(_) | ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
