//! Web layer for the station lookup service.
//!
//! Provides HTTP endpoints for station search and identifier lookup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
