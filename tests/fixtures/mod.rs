//! Test fixtures for HTTP API integration tests.

use std::sync::Arc;
use std::time::Duration;

use sala::{
    infrastructure::repository::InMemoryChatRepository,
    ui::{router, state::AppState},
    usecase::Sweeper,
};

/// Chat room server running on an ephemeral port.
pub struct TestServer {
    base_url: String,
    _sweeper: Option<Sweeper>,
}

impl TestServer {
    /// Start a server without the idle sweeper (presence never expires).
    pub async fn start() -> Self {
        Self::start_inner(None).await
    }

    /// Start a server with a fast idle sweeper for eviction tests.
    pub async fn start_with_sweep(interval: Duration, idle_timeout_ms: i64) -> Self {
        Self::start_inner(Some((interval, idle_timeout_ms))).await
    }

    async fn start_inner(sweep: Option<(Duration, i64)>) -> Self {
        let repository = Arc::new(InMemoryChatRepository::new());
        let state = Arc::new(AppState::new(repository.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router(state))
                .await
                .expect("Test server crashed");
        });

        let _sweeper =
            sweep.map(|(interval, timeout_ms)| Sweeper::spawn(repository, interval, timeout_ms));

        Self {
            base_url: format!("http://{}", addr),
            _sweeper,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
