//! Usuarios API library
//!
//! CRUD over the `usuarios` table with generated OpenAPI documentation.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod usuario;

pub use app::{build_app, AppOptions};
