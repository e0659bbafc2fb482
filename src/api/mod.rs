//! HTTP layer: page views plus the JSON calculation endpoint.
//!
//! - `GET /`, `/simulation`, `/exposure` — HTML pages
//! - `GET /static/{*path}` — embedded CSS/JS
//! - `POST /api/calculate` — step-response calculation
//! - `GET /health` — liveness probe

mod error;
mod handlers;
pub mod pages;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::ApiError;
pub use types::{ErrorResponse, HealthResponse};

use crate::sim::engine::Simulator;

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`. Nothing in it is mutated,
/// so handlers need no locks.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Calculator configured with the request size ceiling.
    pub simulator: Simulator,
}

/// Failure to start or keep serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Builds the axum router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/simulation", get(pages::simulation))
        .route("/exposure", get(pages::exposure))
        .route("/static/{*path}", get(pages::static_asset))
        .route("/api/calculate", post(handlers::calculate))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to the given address and serves until Ctrl-C.
///
/// # Errors
///
/// Returns a `ServerError` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> Result<(), ServerError> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local = listener.local_addr().map_err(ServerError::Serve)?;
    info!("listening on http://{local}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
