//! Usuario service - one SQL statement per operation against `usuarios`
//!
//! Writes acquire a pooled connection explicitly. The `PoolConnection` guard
//! returns it to the pool when it goes out of scope, on success and on every
//! `?` exit alike.

use anyhow::{Context, Result};
use sqlx::PgPool;

use super::model::{NewUsuario, Usuario};
use super::outcome::WriteOutcome;

/// Persistence gateway for the `usuarios` table
pub struct UsuarioService {
    db_pool: PgPool,
}

impl UsuarioService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Fetch every row, ordered by id
    pub async fn list_usuarios(&self) -> Result<Vec<Usuario>> {
        let usuarios = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT id, nombre, edad, juego_favorito
            FROM usuarios
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db_pool)
        .await
        .context("Failed to list usuarios")?;

        Ok(usuarios)
    }

    /// Insert a validated usuario
    pub async fn create_usuario(&self, usuario: &NewUsuario) -> Result<WriteOutcome> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        let result = sqlx::query(
            r#"
            INSERT INTO usuarios (nombre, edad, juego_favorito)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&usuario.name)
        .bind(&usuario.age)
        .bind(&usuario.favorite_game)
        .execute(&mut *conn)
        .await
        .context("Failed to insert usuario")?;

        tracing::debug!(rows = result.rows_affected(), "Insert into usuarios finished");

        Ok(WriteOutcome::from_insert(result.rows_affected()))
    }

    /// Set the favorite game of every usuario with the given name
    pub async fn update_favorite_game(
        &self,
        name: &str,
        favorite_game: &str,
    ) -> Result<WriteOutcome> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        let result = sqlx::query(
            r#"
            UPDATE usuarios
            SET juego_favorito = $1
            WHERE nombre = $2
            "#,
        )
        .bind(favorite_game)
        .bind(name)
        .execute(&mut *conn)
        .await
        .context("Failed to update usuario")?;

        tracing::debug!(name = %name, rows = result.rows_affected(), "Update of usuarios finished");

        Ok(WriteOutcome::from_keyed_write(result.rows_affected()))
    }

    /// Delete the usuario with the given id
    pub async fn delete_usuario(&self, id: i64) -> Result<WriteOutcome> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context("Failed to delete usuario")?;

        tracing::debug!(id, rows = result.rows_affected(), "Delete from usuarios finished");

        Ok(WriteOutcome::from_keyed_write(result.rows_affected()))
    }
}
