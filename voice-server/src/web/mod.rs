//! Web layer for the voice transit assistant.
//!
//! Provides HTTP endpoints for running queries, synthesizing speech, and
//! reverse geocoding, plus the single-page frontend.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
