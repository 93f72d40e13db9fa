//! API error types with HTTP response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::UseCaseError;
use domain::{CatUseCaseError, InvalidIdentifier, StorageError};
use serde::Serialize;
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Bad request from the client.
    #[error("{0}")]
    BadRequest(String),

    /// Expected failure reported by a cat use case.
    #[error(transparent)]
    UseCase(#[from] CatUseCaseError),

    /// Repository fault.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::UseCase(err) => use_case_error_to_response(err),
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                internal_error()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                internal_error()
            }
        };

        let body = ErrorBody {
            status: "error",
            message,
        };
        (status, Json(body)).into_response()
    }
}

fn use_case_error_to_response(err: CatUseCaseError) -> (StatusCode, String) {
    tracing::debug!(error = err.name(), message = %err, "use case rejected request");
    match &err {
        CatUseCaseError::NotFound(_) => (StatusCode::NOT_FOUND, err.message()),
        CatUseCaseError::Validation(_) => (StatusCode::BAD_REQUEST, err.message()),
    }
}

fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error".to_string(),
    )
}

impl From<InvalidIdentifier> for ApiError {
    fn from(err: InvalidIdentifier) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
