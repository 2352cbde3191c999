//! Cooperative cancellation for store operations.
//!
//! A [`RequestContext`] travels with a single inbound request. It carries an
//! explicit cancellation flag and an optional deadline, and may be derived from
//! a parent context. Nothing here preempts running work: callers check the
//! context at the points where abandoning the operation is safe.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tinylink::domain::context::{ContextError, RequestContext};
//!
//! let ctx = RequestContext::with_timeout(Duration::from_secs(5));
//! assert!(ctx.check().is_ok());
//!
//! ctx.cancel();
//! assert_eq!(ctx.check(), Err(ContextError::Cancelled));
//! ```

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use thiserror::Error;

/// Reason a context is no longer live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context cancelled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
    parent: Option<RequestContext>,
}

/// Cancellation signal shared by everything serving one request.
///
/// Cloning is cheap and every clone observes the same signal.
#[derive(Debug, Clone)]
pub struct RequestContext {
    inner: Arc<Inner>,
}

impl RequestContext {
    fn build(deadline: Option<Instant>, parent: Option<RequestContext>) -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                deadline,
                parent,
            }),
        }
    }

    /// A context that is only ever done when [`cancel`](Self::cancel) is called.
    pub fn background() -> Self {
        Self::build(None, None)
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self::build(Some(deadline), None)
    }

    /// Derives a context that is done whenever `self` is done.
    ///
    /// Cancelling the child leaves the parent untouched.
    pub fn child(&self) -> Self {
        Self::build(None, Some(self.clone()))
    }

    /// Derives a context with its own deadline on top of the parent's.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        Self::build(Some(Instant::now() + timeout), Some(self.clone()))
    }

    /// Signals cancellation. Calling it more than once has no further effect.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
    }

    /// The earliest deadline along the parent chain, if any.
    pub fn deadline(&self) -> Option<Instant> {
        let parent = self.inner.parent.as_ref().and_then(RequestContext::deadline);
        match (self.inner.deadline, parent) {
            (Some(own), Some(parent)) => Some(own.min(parent)),
            (own, parent) => own.or(parent),
        }
    }

    /// Returns why the context is done, or `None` while it is still live.
    ///
    /// Explicit cancellation anywhere up the chain takes precedence over an
    /// elapsed deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.is_cancelled() {
            return Some(ContextError::Cancelled);
        }
        match self.deadline() {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    pub fn check(&self) -> Result<(), ContextError> {
        match self.err() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
            || self
                .inner
                .parent
                .as_ref()
                .is_some_and(RequestContext::is_cancelled)
    }

    /// Returns a guard that cancels this context when dropped.
    pub fn cancel_on_drop(&self) -> CancelOnDrop {
        CancelOnDrop { ctx: self.clone() }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}

/// Cancels its context on drop.
///
/// See [`RequestContext::cancel_on_drop`].
#[derive(Debug)]
#[must_use = "the context is cancelled as soon as the guard is dropped"]
pub struct CancelOnDrop {
    ctx: RequestContext,
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.ctx.cancel();
    }
}

/// Pulls the context installed by [`crate::api::middleware::context::layer`].
///
/// Falls back to a background context so handlers mounted without the
/// middleware (for example in tests) still work.
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}
