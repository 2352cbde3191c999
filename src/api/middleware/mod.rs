//! HTTP middleware for request processing.
//!
//! Provides per-request cancellation contexts and observability middleware.

pub mod context;
pub mod tracing;
