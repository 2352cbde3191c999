//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`     - Create a short link
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /`            - Empty code, always 404
//! - `GET  /api/health`  - Health check
//!
//! Redirect paths answer only `GET`; `HEAD` is rejected explicitly since
//! axum would otherwise serve it from the `GET` handler. Any other method,
//! on any path other than `/shorten`, answers `405 Method Not Allowed`. A
//! `GET` for an unknown multi-segment path answers `404 Not Found`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Request context** - Per-request deadline and cancel-on-disconnect

use crate::api;
use crate::api::handlers::{redirect_handler, root_handler, shorten_handler};
use crate::api::middleware::{context, tracing};
use crate::error::AppError;
use crate::state::AppState;
use axum::extract::Request;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, middleware};
use serde_json::json;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/", get(root_handler).head(method_not_allowed))
        .route("/{code}", get(redirect_handler).head(method_not_allowed))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn_with_state(state.clone(), context::layer))
        .with_state(state)
        .layer(tracing::layer())
}

/// Unmatched paths are treated as codes that can never resolve, so they
/// follow the redirect rules: non-`GET` is 405, `GET` is 404.
async fn not_found(req: Request) -> AppError {
    if req.method() != Method::GET {
        return method_not_allowed(req).await;
    }
    AppError::not_found("Not found", json!({ "path": req.uri().path() }))
}

async fn method_not_allowed(req: Request) -> AppError {
    ::tracing::warn!(method = %req.method(), path = %req.uri().path(), "Method not allowed");
    AppError::method_not_allowed(
        "Method not allowed",
        json!({ "method": req.method().as_str() }),
    )
}
