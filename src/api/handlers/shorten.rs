//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::domain::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/aB3xY9" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or `url` is empty.
/// Returns 500 Internal Server Error if the request was cancelled or timed
/// out before the link was stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.link_service.shorten(&ctx, payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&link),
    }))
}
