#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::InMemoryLinkRepository;
use tinylink::routes::app_router;
use tinylink::state::AppState;
use tinylink::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "http://localhost:8080";

/// Builds state around a fresh store and hands back the store for direct seeding.
pub fn create_test_state_with_timeout(
    request_timeout: Duration,
) -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repo.clone(),
        Arc::new(RandomCodeGenerator::new()),
        BASE_URL,
    ));

    (AppState::new(link_service, request_timeout), repo)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    create_test_state_with_timeout(Duration::from_secs(30))
}

/// Full application router behind a mock transport.
pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}
