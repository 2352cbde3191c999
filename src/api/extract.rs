//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that validates its payload.
///
/// Unlike `axum::Json`, it does not require a `Content-Type` header and
/// reports every malformed body as `400 Bad Request`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
        })?;

        let value: T = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode request body");
            AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
