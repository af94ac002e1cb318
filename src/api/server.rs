//! HTTP server for the mock API
//!
//! Axum-based server wiring the middleware chain around the three mock
//! routes. Unmatched paths fall through to axum's default 404.

use axum::{Router, middleware, routing::get};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{
    status_handler, usercheck_handler, usercheck_missing_id, usercount_handler,
};
use super::middleware::{log_request, propagate_request_id};
use super::state::ApiState;
use crate::config::MockConfig;

/// Errors that can occur while starting or running the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the mock API server
///
/// Binds `0.0.0.0` on the configured port and serves until the process
/// exits. Per-connection write failures are handled by the HTTP stack and
/// never terminate the server.
pub async fn start_api_server(config: MockConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = create_router(ApiState::new(config));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, "Starting mock API server");

    // ConnectInfo makes the peer address visible to the logging middleware.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Create the mock API router
///
/// The usercheck route is a wildcard so multi-segment suffixes are handled
/// by the same handler; the bare trailing-slash form maps to the empty-id
/// 404. Layers run request-id assignment before request logging.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/v1/status", get(status_handler))
        .route("/v1/usercheck/", get(usercheck_missing_id))
        .route("/v1/usercheck/{*isid}", get(usercheck_handler))
        .route("/v1/usercount", get(usercount_handler))
        .layer(middleware::from_fn(log_request))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
