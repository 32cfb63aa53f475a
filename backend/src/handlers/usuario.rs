//! Usuario HTTP handlers
//!
//! Each handler validates its body before touching the pool, runs a single
//! statement through `UsuarioService`, and maps the outcome to a status code.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::models::MessageResponse;
use crate::usuario::{
    CreateUsuarioRequest, DeleteUsuarioRequest, UpdateFavoriteGameRequest, Usuario,
    UsuarioService, MSG_ADDED, MSG_DELETED, MSG_UPDATED,
};

/// An unreadable body (bad JSON, wrong content type, empty) has no fields,
/// so it falls through to the route's own validation message.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable request body, treating fields as absent");
            T::default()
        }
    }
}

/// GET /usuarios - List every usuario
#[utoipa::path(
    get,
    path = "/usuarios",
    responses(
        (status = 200, description = "Users fetched successfully", body = [Usuario]),
        (status = 500, description = "Connection error", body = MessageResponse),
    ),
    tag = "default"
)]
pub async fn list_usuarios(
    State(usuario_service): State<Arc<UsuarioService>>,
) -> ApiResult<Json<Vec<Usuario>>> {
    let usuarios = usuario_service.list_usuarios().await?;
    Ok(Json(usuarios))
}

/// POST /usuarios - Create a usuario
#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUsuarioRequest,
    responses(
        (status = 200, description = "Information added successfully", body = MessageResponse),
        (status = 400, description = "Empty or null fields, or the insert failed", body = MessageResponse),
        (status = 500, description = "Connection error", body = MessageResponse),
    ),
    tag = "default"
)]
pub async fn create_usuario(
    State(usuario_service): State<Arc<UsuarioService>>,
    payload: Result<Json<CreateUsuarioRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let usuario = body_or_default(payload)
        .validate()
        .map_err(ApiError::Validation)?;

    usuario_service
        .create_usuario(&usuario)
        .await?
        .respond(MSG_ADDED, ApiError::InsertFailed)
}

/// PUT /usuarios/{name} - Change the favorite game of a usuario by name
#[utoipa::path(
    put,
    path = "/usuarios/{name}",
    params(
        ("name" = String, Path, description = "Name of the user to update")
    ),
    request_body = UpdateFavoriteGameRequest,
    responses(
        (status = 200, description = "Information updated successfully", body = MessageResponse),
        (status = 400, description = "New favorite game is empty or null", body = MessageResponse),
        (status = 404, description = "No user with that name", body = MessageResponse),
        (status = 500, description = "Connection error", body = MessageResponse),
    ),
    tag = "default"
)]
pub async fn update_favorite_game(
    State(usuario_service): State<Arc<UsuarioService>>,
    Path(name): Path<String>,
    payload: Result<Json<UpdateFavoriteGameRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let favorite_game = body_or_default(payload)
        .validate()
        .map_err(ApiError::Validation)?;

    usuario_service
        .update_favorite_game(&name, &favorite_game)
        .await?
        .respond(MSG_UPDATED, ApiError::NotFound)
}

/// DELETE /usuarios - Delete a usuario by id
#[utoipa::path(
    delete,
    path = "/usuarios",
    request_body = DeleteUsuarioRequest,
    responses(
        (status = 200, description = "Information deleted successfully", body = MessageResponse),
        (status = 400, description = "Id is empty or null", body = MessageResponse),
        (status = 404, description = "No user with that id", body = MessageResponse),
        (status = 500, description = "Connection error", body = MessageResponse),
    ),
    tag = "default"
)]
pub async fn delete_usuario(
    State(usuario_service): State<Arc<UsuarioService>>,
    payload: Result<Json<DeleteUsuarioRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = body_or_default(payload)
        .validate()
        .map_err(ApiError::Validation)?;

    // A non-integer id cannot match any row.
    let Some(id) = id else {
        return Err(ApiError::NotFound);
    };

    usuario_service
        .delete_usuario(id)
        .await?
        .respond(MSG_DELETED, ApiError::NotFound)
}
