//! Link store implementations.
//!
//! - [`InMemoryLinkRepository`] - Process-memory map behind a reader/writer lock

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
