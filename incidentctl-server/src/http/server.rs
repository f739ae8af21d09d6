//! Axum server setup
//!
//! Server skeleton with:
//! - CORS open to every origin by default (credentials allowed)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::extract::FromRef;
use axum::http::HeaderValue;
use axum::Router;
use sqlx::AnyPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// Cross-origin policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorsMode {
    /// Any origin, method and header, with credentials
    #[default]
    Permissive,
    /// Only localhost origins
    Localhost,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// Cross-origin policy (default: permissive)
    pub cors: CorsMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors: CorsMode::Permissive,
        }
    }
}

/// Shared application state
///
/// Holds only the pool handle; every request takes its own `Session`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: AnyPool,
}

fn cors_layer(mode: CorsMode) -> CorsLayer {
    match mode {
        // Mirrors the request origin, which keeps `allow_credentials` legal
        CorsMode::Permissive => CorsLayer::very_permissive(),
        CorsMode::Localhost => CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
            ])
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::incidents::router())
        .layer(cors_layer(config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let config = ServerConfig::default();
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: AnyPool, config: ServerConfig) -> Result<(), ServerError> {
    if config.cors == CorsMode::Permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
    }

    let app = build_router(AppState { pool }, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(bind = %config.bind_addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
