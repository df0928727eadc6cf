//! # API Errors
//!
//! Error taxonomy for the HTTP surface. Each error maps to exactly one
//! response; internal causes are logged at the boundary and never leak
//! into the client body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::TranslateError;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP surface errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Required body field missing
    #[error("Missing \"{0}\" field in request body")]
    MissingField(&'static str),

    /// Body field present but empty after trimming
    #[error("String value cannot be empty")]
    EmptyValue,

    /// Body field has the wrong JSON type
    #[error("Invalid data type for \"{0}\" (must be string)")]
    InvalidFieldType(&'static str),

    /// Query parameter failed validation
    #[error("Invalid {0} parameter ({1})")]
    InvalidQueryParam(&'static str, &'static str),

    /// Required query parameter missing
    #[error("Missing \"{0}\" parameter")]
    MissingParam(&'static str),

    /// A record with the same trimmed value already exists
    #[error("String already exists in the system")]
    DuplicateValue,

    /// Unknown value
    #[error("String does not exist in the system")]
    NotFound,

    /// Query understood but the derived filters can never hold
    #[error("Query parsed but resulted in conflicting filters")]
    Translation(#[from] TranslateError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected internal failure; detail is logged, not returned
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::EmptyValue => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_, _) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,

            // 422 Unprocessable Entity
            ApiError::InvalidFieldType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Translation(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 409 Conflict
            ApiError::DuplicateValue => StatusCode::CONFLICT,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateValue => ApiError::DuplicateValue,
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(%detail, "request failed with internal error");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
