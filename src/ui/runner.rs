//! Server assembly: router, storage backend, sweeper lifecycle.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    infrastructure::repository::InMemoryChatRepository,
    ui::{handler, signal, state::AppState},
    usecase::{Sweeper, DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_SWEEP_INTERVAL},
};

/// Server configuration, resolved by the binary's CLI
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Inactivity timeout before a participant is evicted (milliseconds)
    pub idle_timeout_ms: i64,
    /// Interval between sweep passes
    pub sweep_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

/// Build the application router.
///
/// The browser front end is served from another origin, so CORS is
/// permissive.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handler::health_check))
        .route(
            "/participants",
            post(handler::register_participant).get(handler::list_participants),
        )
        .route(
            "/messages",
            post(handler::post_message).get(handler::list_messages),
        )
        .route("/status", post(handler::heartbeat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the chat room server until a shutdown signal arrives.
///
/// Storage initialization failure is fatal: the function returns the
/// error and the binary aborts instead of serving without a backend.
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let repository = Arc::new(InMemoryChatRepository::new());
    let state = Arc::new(AppState::new(repository.clone()));

    let listener =
        tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    // The sweeper is owned by the server lifecycle: spawned here,
    // stopped after graceful shutdown.
    let sweeper = Sweeper::spawn(repository, config.sweep_interval, config.idle_timeout_ms);

    let result = axum::serve(listener, router(state))
        .with_graceful_shutdown(signal::shutdown_signal())
        .await;

    sweeper.stop();
    result
}
