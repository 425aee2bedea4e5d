//! Per-request tracing span and access log

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Tag the request with an id and log its outcome
///
/// `/health` passes through unlogged
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    let _guard = span.enter();
    match status {
        500.. => warn!(status, latency_ms, "Request failed"),
        _ => info!(status, latency_ms, "Request completed"),
    }

    response
}
