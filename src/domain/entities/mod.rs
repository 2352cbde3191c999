//! Core domain entities.
//!
//! - [`Link`] - A short code together with the URL it resolves to

pub mod link;

pub use link::Link;
