//! Process-memory implementation of the link repository.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{error, info, warn};

use crate::domain::context::RequestContext;
use crate::domain::repositories::{LinkRepository, StoreError};

/// In-memory link store guarded by a single reader/writer lock.
///
/// The lock covers the whole map: lookups share it, writes hold it
/// exclusively. Every operation is a single hash map step, so the lock is
/// never held across an `.await` or for unbounded work.
///
/// Entries live until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, String>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with room for `capacity` mappings before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn set(&self, ctx: &RequestContext, code: &str, url: &str) -> Result<(), StoreError> {
        let mut links = self.links.write();

        if let Err(e) = ctx.check() {
            error!(code, error = %e, "Context done while storing URL");
            return Err(e.into());
        }

        links.insert(code.to_owned(), url.to_owned());
        info!(code, "Stored URL");
        Ok(())
    }

    async fn get(&self, ctx: &RequestContext, code: &str) -> Result<Option<String>, StoreError> {
        let links = self.links.read();

        if let Err(e) = ctx.check() {
            error!(code, error = %e, "Context done while retrieving URL");
            return Err(e.into());
        }

        let url = links.get(code).cloned();
        match url {
            Some(_) => info!(code, "Retrieved URL"),
            None => warn!(code, "URL not found"),
        }
        Ok(url)
    }

    async fn count(&self) -> usize {
        self.links.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    fn ctx() -> RequestContext {
        RequestContext::background()
    }

    fn cancelled() -> RequestContext {
        let ctx = RequestContext::background();
        ctx.cancel();
        ctx
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let repo = InMemoryLinkRepository::new();

        repo.set(&ctx(), "abc123", "https://example.com")
            .await
            .unwrap();

        let url = repo.get(&ctx(), "abc123").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryLinkRepository::new();

        let url = repo.get(&ctx(), "nope00").await.unwrap();
        assert!(url.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_last_write_wins() {
        let repo = InMemoryLinkRepository::new();

        repo.set(&ctx(), "abc123", "https://first.com").await.unwrap();
        repo.set(&ctx(), "abc123", "https://second.com")
            .await
            .unwrap();

        let url = repo.get(&ctx(), "abc123").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://second.com"));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_empty_url_is_stored_verbatim() {
        let repo = InMemoryLinkRepository::new();

        repo.set(&ctx(), "blank0", "").await.unwrap();

        let url = repo.get(&ctx(), "blank0").await.unwrap();
        assert_eq!(url.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_cancelled_set_does_not_mutate() {
        let repo = InMemoryLinkRepository::new();

        let err = repo
            .set(&cancelled(), "abc123", "https://example.com")
            .await
            .unwrap_err();

        assert_eq!(err, StoreError::Cancelled);
        assert!(repo.get(&ctx(), "abc123").await.unwrap().is_none());
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn test_cancelled_set_keeps_previous_value() {
        let repo = InMemoryLinkRepository::new();
        repo.set(&ctx(), "abc123", "https://old.com").await.unwrap();

        let result = repo.set(&cancelled(), "abc123", "https://new.com").await;

        assert!(result.is_err());
        let url = repo.get(&ctx(), "abc123").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://old.com"));
    }

    #[tokio::test]
    async fn test_cancelled_get() {
        let repo = InMemoryLinkRepository::new();
        repo.set(&ctx(), "abc123", "https://example.com")
            .await
            .unwrap();

        let err = repo.get(&cancelled(), "abc123").await.unwrap_err();
        assert_eq!(err, StoreError::Cancelled);
    }

    #[tokio::test]
    async fn test_expired_deadline() {
        let repo = InMemoryLinkRepository::new();
        let expired = RequestContext::with_timeout(Duration::ZERO);

        let err = repo
            .set(&expired, "abc123", "https://example.com")
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::DeadlineExceeded);

        let err = repo.get(&expired, "abc123").await.unwrap_err();
        assert_eq!(err, StoreError::DeadlineExceeded);
    }

    #[tokio::test]
    async fn test_instances_are_independent() {
        let a = InMemoryLinkRepository::new();
        let b = InMemoryLinkRepository::with_capacity(16);

        a.set(&ctx(), "abc123", "https://example.com").await.unwrap();

        assert!(b.get(&ctx(), "abc123").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_access() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        let mut handles = vec![];

        for i in 0..200u32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.set(
                    &RequestContext::background(),
                    &format!("c{:05}", i),
                    &format!("https://example{}.com", i),
                )
                .await
                .unwrap();
            }));
        }

        for handle in handles.drain(..) {
            handle.await.unwrap();
        }

        for i in 0..200u32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let url = repo
                    .get(&RequestContext::background(), &format!("c{:05}", i))
                    .await
                    .unwrap();
                assert_eq!(url, Some(format!("https://example{}.com", i)));
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.count().await, 200);
    }
}
