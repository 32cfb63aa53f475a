//! Mapping from affected-row counts to responses
//!
//! A write that touches no row is a normal outcome, not an error. It only
//! becomes an `ApiError` when the handler turns it into a response.

use axum::Json;

use crate::error::{ApiError, ApiResult};
use crate::models::MessageResponse;

/// Result of a single INSERT/UPDATE/DELETE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The statement affected the expected rows
    Applied,
    /// The statement ran but did not affect the expected rows
    Missed,
}

impl WriteOutcome {
    /// An INSERT succeeds only when it adds exactly one row
    pub fn from_insert(rows_affected: u64) -> Self {
        if rows_affected == 1 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::Missed
        }
    }

    /// UPDATE and DELETE succeed when they touch at least one row
    pub fn from_keyed_write(rows_affected: u64) -> Self {
        if rows_affected > 0 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::Missed
        }
    }

    pub fn respond(self, success: &'static str, miss: ApiError) -> ApiResult<Json<MessageResponse>> {
        match self {
            WriteOutcome::Applied => Ok(Json(MessageResponse::new(success))),
            WriteOutcome::Missed => Err(miss),
        }
    }
}
