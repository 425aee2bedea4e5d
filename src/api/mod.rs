//! HTTP API
//!
//! Thin transport around the signal engine:
//! - `POST /compute`: score one match
//! - `/health`: liveness check, any method
//! - `GET /meta`: effective scoring settings

mod error;
mod middleware;
mod routes;

pub use error::{ApiError, ErrorBody};
pub use middleware::request_logging;
pub use routes::{ComputeRequest, ComputeResponse, HealthResponse, MetaResponse, SERVICE_NAME};

use crate::config::EngineConfig;
use crate::signal::{PriceFilter, SignalEngine};
use anyhow::Context;
use axum::{
    routing::{any, get, post},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Read-only state shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: SignalEngine,
    pub filter: PriceFilter,
    pub config: EngineConfig,
}

impl AppState {
    /// State scoring with the mean model under the given settings
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: SignalEngine::mean(),
            filter: PriceFilter::new(),
            config,
        }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/compute",
            post(routes::compute).fallback(routes::method_not_allowed),
        )
        .route("/health", any(routes::health))
        .route(
            "/meta",
            get(routes::meta).fallback(routes::method_not_allowed),
        )
        .fallback(routes::not_found)
        .with_state(Arc::new(state))
        .layer(axum::middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        threshold = %state.config.threshold,
        reject_non_positive_prices = state.config.reject_non_positive_prices,
        "API server listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
