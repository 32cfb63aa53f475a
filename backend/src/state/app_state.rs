//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::usuario::UsuarioService;

/// Shared application state
///
/// The pool handle travels with the state; there is no process-wide pool.
#[derive(Clone)]
pub struct AppState {
    pub usuario_service: Arc<UsuarioService>,
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            usuario_service: Arc::new(UsuarioService::new(db_pool.clone())),
            db_pool,
        }
    }
}

impl FromRef<AppState> for Arc<UsuarioService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.usuario_service.clone()
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
