//! Middleware for the usuarios API
//!
//! Request tracing and response security headers.

mod security;
mod tracing;

pub use security::security_headers;
pub use tracing::request_tracing;
