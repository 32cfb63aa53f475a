//! Common test utilities for the usuarios API integration tests.

#![allow(dead_code)]

use std::net::IpAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use usuarios_api::config::{Config, Environment};
use usuarios_api::state::AppState;
use usuarios_api::{build_app, db, AppOptions};

fn test_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        environment: Environment::Development,
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        db_max_connections: 2,
        db_acquire_timeout: Duration::from_millis(300),
        run_migrations: false,
        cors_allowed_origins: None,
        public_url: None,
        log_level: "debug".to_string(),
    }
}

/// Router whose pool points at a closed port, so every acquire fails.
///
/// Validation paths never reach the pool; everything else yields 500.
pub fn app_without_db() -> Router {
    let pool = db::create_lazy_pool(&test_config("postgresql://usuarios:pw@127.0.0.1:1/usuarios"))
        .expect("lazy pool");
    build_app(AppState::new(pool), &AppOptions::default())
}

/// Pool for the database-backed tests, migrated and ready.
pub async fn create_test_pool() -> PgPool {
    let database_url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| "postgresql://localhost/usuarios_test".to_string());

    let mut config = test_config(&database_url);
    config.db_acquire_timeout = Duration::from_secs(5);
    config.db_max_connections = 5;

    let pool = db::create_pool(&config)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub fn app_with_pool(pool: PgPool) -> Router {
    build_app(AppState::new(pool), &AppOptions::default())
}

/// Name no other test run will produce
pub fn unique_name(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{}", prefix, nanos)
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    send_request(app, builder.body(body).unwrap()).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}
