//! Route definitions for the usuarios API

mod health;
mod usuario;

pub use health::health_routes;
pub use usuario::usuario_routes;
