use std::sync::Arc;
use std::time::Duration;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Shared state injected into every handler.
///
/// Cloning is cheap; all clones share one link store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    /// Deadline applied to each request's [`crate::domain::context::RequestContext`].
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<InMemoryLinkRepository>>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            link_service,
            request_timeout,
        }
    }
}
