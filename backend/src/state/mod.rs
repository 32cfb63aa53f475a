//! Shared state handed to every route

mod app_state;

pub use app_state::AppState;
