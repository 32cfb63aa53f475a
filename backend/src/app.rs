//! Router assembly shared by the binary and the integration tests

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::middleware;
use crate::openapi::swagger_routes;
use crate::routes;
use crate::state::AppState;

/// Options that shape the router beyond the application state
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Comma separated list; permissive CORS when unset or empty
    pub cors_allowed_origins: Option<String>,
    /// Extra server entry in the OpenAPI document
    pub public_url: Option<String>,
}

/// Build the full application router
pub fn build_app(app_state: AppState, options: &AppOptions) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::usuario_routes())
        .merge(swagger_routes(options.public_url.as_deref()))
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        .layer(configure_cors(options.cors_allowed_origins.as_deref()))
}

fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let allowed_origins = allowed_origins.unwrap_or_default();

    if allowed_origins.trim().is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
