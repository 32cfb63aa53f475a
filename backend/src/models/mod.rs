//! Response shapes shared by every route

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-list response: a single human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "information added successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
