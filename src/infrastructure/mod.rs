//! Infrastructure layer.
//!
//! Implements the store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementation

pub mod persistence;
