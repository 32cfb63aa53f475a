//! Centralized API error handling
//!
//! Every failure a handler can report maps to exactly one status code and a
//! JSON body carrying a single `message` field. Infrastructure detail is logged
//! here and never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::MessageResponse;

pub const MSG_INSERT_FAILED: &str = "failed to add information";
pub const MSG_NOT_FOUND: &str = "not found";
pub const MSG_CONNECTION_ERROR: &str = "connection error";

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed presence/blank checks
    #[error("{0}")]
    Validation(&'static str),

    /// INSERT did not affect exactly one row
    #[error("failed to add information")]
    InsertFailed,

    /// UPDATE/DELETE matched no row
    #[error("not found")]
    NotFound,

    /// Pool, network or statement failure; the detail stays server-side
    #[error("connection error: {0}")]
    Connection(String),
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InsertFailed => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Connection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(message) => *message,
            ApiError::InsertFailed => MSG_INSERT_FAILED,
            ApiError::NotFound => MSG_NOT_FOUND,
            ApiError::Connection(_) => MSG_CONNECTION_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Connection(detail) => {
                tracing::error!(error = %detail, "Connection error");
            }
            _ => {
                tracing::debug!(error = %self, status = %status.as_u16(), "Client error occurred");
            }
        }

        (status, Json(MessageResponse::new(self.public_message()))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Connection(format!("{:#}", err))
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;
