//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::info;

use crate::domain::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the request was cancelled or timed
/// out, or if the stored destination cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, AppError> {
    redirect(&state, &ctx, &code).await
}

/// `GET /` carries an empty code and never resolves.
pub async fn root_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, AppError> {
    redirect(&state, &ctx, "").await
}

async fn redirect(
    state: &AppState,
    ctx: &RequestContext,
    code: &str,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(ctx, code).await?;

    let location = HeaderValue::try_from(link.long_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "code": code }),
        )
    })?;

    info!(code, url = %link.long_url, "Redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
