//! Error types for the people service.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Validation conditions raised by the person store.
///
/// The store is the single owner of the rule "name non-empty, age positive";
/// handlers only translate these into responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Name was empty.
    #[error("name must be non-empty")]
    EmptyName,

    /// Age was zero or negative.
    #[error("age must be a positive integer, got {0}")]
    NonPositiveAge(i64),
}

/// Request-level errors resolved into HTTP responses.
///
/// Every variant maps to a status code and a JSON `{"error": ...}` body;
/// none of them terminate the process.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body was not valid JSON.
    #[error("invalid JSON body")]
    InvalidJson(#[from] JsonRejection),

    /// Request body decoded but failed the store's validation rule.
    #[error("name and age must be provided and valid")]
    Validation(#[from] StoreError),

    /// Known route, unsupported method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Response serialization failed. Server-side defect, not client-caused.
    #[error("failed to encode response: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code this error resolves to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Encoding failures are logged with detail but surfaced generically.
        let message = match &self {
            ApiError::Encoding(source) => {
                error!("response encoding failed: {source}");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
