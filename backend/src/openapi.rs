//! `OpenAPI` documentation and Swagger UI configuration.

use axum::Router;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::health::HealthResponse;
use crate::models::MessageResponse;
use crate::state::AppState;
use crate::usuario::{
    CreateUsuarioRequest, DeleteUsuarioRequest, UpdateFavoriteGameRequest, Usuario,
};

/// `OpenAPI` documentation for the usuarios API.
#[derive(OpenApi)]
#[openapi(
    info(title = "API Usuarios", version = "1.0.0"),
    paths(
        crate::handlers::usuario::list_usuarios,
        crate::handlers::usuario::create_usuario,
        crate::handlers::usuario::update_favorite_game,
        crate::handlers::usuario::delete_usuario,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        Usuario,
        CreateUsuarioRequest,
        UpdateFavoriteGameRequest,
        DeleteUsuarioRequest,
        MessageResponse,
        HealthResponse,
    )),
    tags(
        (name = "default", description = "Operations on users"),
        (name = "health", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// The generated document, with `public_url` listed as a server when set
pub fn api_doc(public_url: Option<&str>) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(url) = public_url {
        doc.servers = Some(vec![Server::new(url)]);
    }
    doc
}

/// Swagger UI at `/api-docs`, document at `/api-docs/openapi.json`
pub fn swagger_routes(public_url: Option<&str>) -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api_doc(public_url)))
}
