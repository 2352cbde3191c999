//! Per-request cancellation context middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::context::RequestContext;
use crate::state::AppState;

/// Installs a [`RequestContext`] for the request.
///
/// The context expires after the configured request timeout and is cancelled
/// when this middleware's future finishes or is dropped, which is what
/// happens when the client disconnects mid-request. Handlers pick it up by
/// taking a `RequestContext` argument.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), context::layer));
/// ```
pub async fn layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::with_timeout(state.request_timeout);
    let _guard = ctx.cancel_on_drop();

    req.extensions_mut().insert(ctx);
    next.run(req).await
}
