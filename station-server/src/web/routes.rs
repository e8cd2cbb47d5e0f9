//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::document::StationDocument;
use crate::lookup::ResolveError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/:id", get(get_station))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by free text, or list them all.
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationsRequest>,
) -> Response {
    let document = state.stations.listing(req.query(), &req.options()).await;
    Json(document.as_ref()).into_response()
}

/// Look up one station by any of its identifiers.
async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StationDocument>, AppError> {
    let record = state.stations.directory().resolve(&id)?;
    Ok(Json(state.stations.documents().station(record)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
