//! # tinylink
//!
//! A small URL shortening service built with Axum. Links live in process
//! memory and disappear on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity, store contract and request cancellation
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` with `{"url": "..."}` returns `{"short_url": "<base>/<code>"}`
//! - `GET /{code}` redirects (302) to the stored URL
//!
//! ## Concurrency
//!
//! One [`InMemoryLinkRepository`](infrastructure::persistence::InMemoryLinkRepository)
//! is shared by every request. Lookups run in parallel; writes are exclusive.
//! Each store call first checks the request's
//! [`RequestContext`](domain::context::RequestContext) and does nothing if the
//! request was already cancelled or timed out.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::context::{ContextError, RequestContext};
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::{LinkRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
