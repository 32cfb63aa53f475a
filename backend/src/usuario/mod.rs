//! Usuario domain module
//!
//! Contains the row model, request validation, write outcomes and the
//! persistence service for the `usuarios` table.

mod model;
mod outcome;
mod service;

pub use model::*;
pub use outcome::WriteOutcome;
pub use service::UsuarioService;
