//! MLOps Metrics Service
//!
//! This crate provides the HTTP server for the MLOps metrics service. It
//! accepts per-tenant tracking calls, aggregates them into an in-memory
//! metrics registry, and republishes the aggregates in the Prometheus
//! text exposition format.
//!
//! # Architecture
//!
//! The server is built on Axum and Tokio, providing:
//! - `POST /track` for metric reports, validated and classified by tenant
//! - `GET /metrics` for pull-based scraping of the registry
//! - `GET /health` for load balancers and monitoring systems
//!
//! # Example
//!
//! ```no_run
//! use api::run_server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_server().await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod routes;
mod state;

pub use config::Config;
pub use state::AppState;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum accepted request body size. Tracking payloads are tiny; anything
/// larger is not a tracking call.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Runs the MLOps metrics service.
///
/// This function initializes the server with configuration from environment
/// variables and starts listening for incoming connections. It handles
/// graceful shutdown on SIGTERM/SIGINT signals.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_server() -> Result<()> {
    let config = Config::from_env()?;
    run_server_with_config(config).await
}

/// Runs the MLOps metrics service with the provided configuration.
///
/// This is useful for testing or when you want to provide configuration
/// programmatically.
///
/// # Errors
///
/// Returns an error if:
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_server_with_config(config: Config) -> Result<()> {
    let addr = config.socket_addr();

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "MLOps metrics service starting"
    );

    let app = create_router(AppState::new());
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Creates the main application router with all routes and middleware.
///
/// The metrics registry travels inside `state`; injecting it here keeps
/// the registry an explicit dependency of the HTTP layer. This function is
/// public to allow testing the router without starting a full server.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::track_routes(state.clone()))
        .merge(routes::metrics_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

/// Waits for a shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
