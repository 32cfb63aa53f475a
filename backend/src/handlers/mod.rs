//! API handlers

pub mod health;
pub mod usuario;

pub use health::{health_check, root};
pub use usuario::{create_usuario, delete_usuario, list_usuarios, update_favorite_game};
