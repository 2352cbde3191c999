//! Store contract for code → URL mappings.

use crate::domain::context::{ContextError, RequestContext};
use async_trait::async_trait;
use thiserror::Error;

/// Failure outcomes of a store operation.
///
/// The only way a store call fails is that the caller's context was already
/// done when the call started. An absent code is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store operation cancelled")]
    Cancelled,
    #[error("store operation deadline exceeded")]
    DeadlineExceeded,
}

impl From<ContextError> for StoreError {
    fn from(err: ContextError) -> Self {
        match err {
            ContextError::Cancelled => StoreError::Cancelled,
            ContextError::DeadlineExceeded => StoreError::DeadlineExceeded,
        }
    }
}

/// Concurrent code → URL mapping shared by every request handler.
///
/// Both operations check the context on entry and leave the mapping untouched
/// when it is already done. There is no combined read-modify-write operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts or overwrites the destination for `code`. Last writer wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Cancelled`] or [`StoreError::DeadlineExceeded`]
    /// if `ctx` is done on entry.
    async fn set(&self, ctx: &RequestContext, code: &str, url: &str) -> Result<(), StoreError>;

    /// Looks up the destination for `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the code is stored
    /// - `Ok(None)` if it is not
    ///
    /// # Errors
    ///
    /// Same as [`LinkRepository::set`].
    async fn get(&self, ctx: &RequestContext, code: &str) -> Result<Option<String>, StoreError>;

    /// Counts stored mappings. Not cancellable.
    async fn count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_error_conversion() {
        assert_eq!(
            StoreError::from(ContextError::Cancelled),
            StoreError::Cancelled
        );
        assert_eq!(
            StoreError::from(ContextError::DeadlineExceeded),
            StoreError::DeadlineExceeded
        );
    }
}
