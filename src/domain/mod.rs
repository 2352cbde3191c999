//! Domain layer: the short link model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait definitions
//! - [`context`] - Per-request cancellation signal honoured by the store
//!
//! The domain layer has no dependency on the HTTP or infrastructure layers,
//! apart from letting handlers extract a [`context::RequestContext`].

pub mod context;
pub mod entities;
pub mod repositories;
