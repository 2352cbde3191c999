//! Application layer services.
//!
//! Services coordinate the code generator and the link store and hand
//! handlers a small API that speaks [`crate::error::AppError`].
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
