//! API route configuration.

use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Operational routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /health` - Service status and link count
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
