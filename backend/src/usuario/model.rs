//! Usuario models and request DTOs
//!
//! Request bodies are deserialized leniently (every field optional, any JSON
//! type) so that presence and blankness are decided here rather than by the
//! JSON extractor. Each DTO's `validate` normalizes the raw fields to strings
//! and either yields the validated input or the route's 400 message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub const MSG_FIELDS_REQUIRED: &str = "fields cannot be empty or null";
pub const MSG_FAVORITE_GAME_REQUIRED: &str = "new favorite game cannot be empty or null";
pub const MSG_ID_REQUIRED: &str = "id cannot be empty or null";

pub const MSG_ADDED: &str = "information added successfully";
pub const MSG_UPDATED: &str = "information updated successfully";
pub const MSG_DELETED: &str = "information deleted successfully";

/// A row of the `usuarios` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    #[schema(example = 1)]
    pub id: i64,
    #[sqlx(rename = "nombre")]
    #[schema(example = "Ana")]
    pub name: String,
    #[sqlx(rename = "edad")]
    #[schema(example = "30")]
    pub age: String,
    #[sqlx(rename = "juego_favorito")]
    #[schema(example = "Chess")]
    pub favorite_game: String,
}

/// Request DTO for POST /usuarios
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUsuarioRequest {
    #[serde(default, alias = "Nombre")]
    #[schema(value_type = Option<String>, example = "Ana")]
    pub name: Option<Value>,

    /// Accepted as a string or a number, stored as text
    #[serde(default, alias = "Edad")]
    #[schema(value_type = Option<String>, example = "30")]
    pub age: Option<Value>,

    #[serde(default, rename = "favoriteGame", alias = "JuegoFavorito")]
    #[schema(value_type = Option<String>, example = "Chess")]
    pub favorite_game: Option<Value>,
}

/// Validated input for an INSERT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsuario {
    pub name: String,
    pub age: String,
    pub favorite_game: String,
}

impl CreateUsuarioRequest {
    pub fn validate(&self) -> Result<NewUsuario, &'static str> {
        let name = required_text(self.name.as_ref()).ok_or(MSG_FIELDS_REQUIRED)?;
        let age = required_text(self.age.as_ref()).ok_or(MSG_FIELDS_REQUIRED)?;
        let favorite_game =
            required_text(self.favorite_game.as_ref()).ok_or(MSG_FIELDS_REQUIRED)?;

        Ok(NewUsuario {
            name,
            age,
            favorite_game,
        })
    }
}

/// Request DTO for PUT /usuarios/{name}
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateFavoriteGameRequest {
    #[serde(default, rename = "newFavoriteGame", alias = "NuevoJuegoFavorito")]
    #[schema(value_type = Option<String>, example = "Go")]
    pub new_favorite_game: Option<Value>,
}

impl UpdateFavoriteGameRequest {
    pub fn validate(&self) -> Result<String, &'static str> {
        required_text(self.new_favorite_game.as_ref()).ok_or(MSG_FAVORITE_GAME_REQUIRED)
    }
}

/// Request DTO for DELETE /usuarios
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteUsuarioRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "1")]
    pub id: Option<Value>,
}

impl DeleteUsuarioRequest {
    /// `Ok(None)` means the id is present but is not an integer, so it cannot
    /// name any row.
    pub fn validate(&self) -> Result<Option<i64>, &'static str> {
        let id = required_text(self.id.as_ref()).ok_or(MSG_ID_REQUIRED)?;
        Ok(id.trim().parse::<i64>().ok())
    }
}

/// String form of a JSON field, if it has one
pub fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn required_text(value: Option<&Value>) -> Option<String> {
    field_text(value).filter(|text| !text.trim().is_empty())
}
