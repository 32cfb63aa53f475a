//! Usuario route definitions

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::usuario::{
    create_usuario, delete_usuario, list_usuarios, update_favorite_game,
};
use crate::state::AppState;

pub fn usuario_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/usuarios",
            get(list_usuarios).post(create_usuario).delete(delete_usuario),
        )
        .route("/usuarios/:name", put(update_favorite_game))
}
