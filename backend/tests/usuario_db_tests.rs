//! Database-backed tests for the `/usuarios` routes.
//!
//! These need a Postgres instance at `TEST_DATABASE_URL`:
//!
//! ```text
//! TEST_DATABASE_URL=postgresql://localhost/usuarios_test cargo test -- --ignored
//! ```

mod common;

use axum::{http::Method, http::StatusCode, Router};
use serde_json::{json, Value};

use common::{app_with_pool, create_test_pool, message, send, unique_name};
use usuarios_api::usuario::Usuario;

async fn list(app: &Router) -> Vec<Usuario> {
    let (status, body) = send(app, Method::GET, "/usuarios", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body).expect("list body is an array of usuarios")
}

async fn find_by_name(app: &Router, name: &str) -> Vec<Usuario> {
    list(app)
        .await
        .into_iter()
        .filter(|u| u.name == name)
        .collect()
}

async fn create(app: &Router, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/usuarios", Some(body)).await
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_create_then_list_round_trip() {
    let app = app_with_pool(create_test_pool().await);
    let name = unique_name("Ana");

    let (status, body) = create(
        &app,
        json!({ "name": name, "age": "30", "favoriteGame": "Chess" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&body), "information added successfully");

    let rows = find_by_name(&app, &name).await;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].id > 0);
    assert_eq!(rows[0].age, "30");
    assert_eq!(rows[0].favorite_game, "Chess");
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_numeric_age_is_stored_as_text() {
    let app = app_with_pool(create_test_pool().await);
    let name = unique_name("Luis");

    let (status, _) = create(
        &app,
        json!({ "Nombre": name, "Edad": 41, "JuegoFavorito": "Tetris" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let rows = find_by_name(&app, &name).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].age, "41");
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_blank_create_inserts_nothing() {
    let app = app_with_pool(create_test_pool().await);
    let name = unique_name("Blank");

    let (status, body) = create(
        &app,
        json!({ "name": name, "age": "30", "favoriteGame": "  " }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "fields cannot be empty or null");

    assert!(find_by_name(&app, &name).await.is_empty());
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_update_changes_only_favorite_game() {
    let app = app_with_pool(create_test_pool().await);
    let name = unique_name("Eva");

    create(&app, json!({ "name": name, "age": "25", "favoriteGame": "Chess" })).await;
    let before = find_by_name(&app, &name).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/usuarios/{}", name),
        Some(json!({ "newFavoriteGame": "Go" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&body), "information updated successfully");

    let after = find_by_name(&app, &name).await;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, before[0].id);
    assert_eq!(after[0].age, "25");
    assert_eq!(after[0].favorite_game, "Go");
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_blank_update_alters_nothing() {
    let app = app_with_pool(create_test_pool().await);
    let name = unique_name("Ivo");

    create(&app, json!({ "name": name, "age": "50", "favoriteGame": "Chess" })).await;

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/usuarios/{}", name),
        Some(json!({ "newFavoriteGame": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(find_by_name(&app, &name).await[0].favorite_game, "Chess");
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_update_unknown_name_returns_404() {
    let app = app_with_pool(create_test_pool().await);
    let name = unique_name("Nobody");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/usuarios/{}", name),
        Some(json!({ "newFavoriteGame": "Go" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "not found");
    assert!(find_by_name(&app, &name).await.is_empty());
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_delete_twice_returns_200_then_404() {
    let app = app_with_pool(create_test_pool().await);
    let name = unique_name("Teo");

    create(&app, json!({ "name": name, "age": "19", "favoriteGame": "Doom" })).await;
    let id = find_by_name(&app, &name).await[0].id;

    let (status, body) = send(&app, Method::DELETE, "/usuarios", Some(json!({ "id": id }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message(&body), "information deleted successfully");

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/usuarios",
        Some(json!({ "id": id.to_string() })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message(&body), "not found");

    assert!(find_by_name(&app, &name).await.is_empty());
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_delete_unknown_id_removes_nothing() {
    let pool = create_test_pool().await;
    let app = app_with_pool(pool.clone());

    let before: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM usuarios WHERE id = $1")
        .bind(i64::MAX)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(before.0, 0);

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/usuarios",
        Some(json!({ "id": i64::MAX })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_health_reports_connected_database() {
    let app = app_with_pool(create_test_pool().await);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}
