//! Store trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for service tests.

pub mod link_repository;

pub use link_repository::{LinkRepository, StoreError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
