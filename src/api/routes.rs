//! Route handlers

use super::{ApiError, AppState};
use crate::model::MatchInput;
use crate::signal::{FilterResult, Signal};
use crate::telemetry::{self, CounterMetric, LatencyMetric};
use axum::{body::Bytes, extract::State, Json};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Name reported by the health and meta endpoints
pub const SERVICE_NAME: &str = "edge-engine";

/// Body of a compute request
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ComputeRequest {
    #[serde(rename = "match", default)]
    pub match_input: MatchInput,
}

impl ComputeRequest {
    /// Decode the first JSON value of `bytes`, ignoring anything after it
    ///
    /// Absent fields take their defaults. An empty body is an error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Self>()
            .next()
            .unwrap_or_else(|| Err(de::Error::custom("empty request body")))
    }
}

/// Body of a compute response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ComputeResponse {
    pub signals: Vec<Signal>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Effective scoring settings of this process
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub threshold: Decimal,
    pub reject_non_positive_prices: bool,
}

/// Score one match with the configured threshold
///
/// The body is decoded by hand so every decode failure maps to a 400,
/// regardless of content type
pub async fn compute(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ComputeResponse>, ApiError> {
    let request = ComputeRequest::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting undecodable compute request");
        telemetry::record_rejection("bad_json");
        ApiError::BadJson(e)
    })?;

    let signals = state.score(&request.match_input)?;
    Ok(Json(ComputeResponse { signals }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

pub async fn meta(State(state): State<Arc<AppState>>) -> Json<MetaResponse> {
    Json(MetaResponse {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        threshold: state.config.threshold,
        reject_non_positive_prices: state.config.reject_non_positive_prices,
    })
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

impl AppState {
    /// Filter (when enabled) and score a match, recording metrics
    pub fn score(&self, input: &MatchInput) -> Result<Vec<Signal>, ApiError> {
        if self.config.reject_non_positive_prices {
            if let FilterResult::Reject(reason) = self.filter.apply(input) {
                tracing::debug!(match_id = %input.id, %reason, "Match rejected by filter");
                telemetry::record_rejection(reason.label());
                return Err(reason.into());
            }
        }

        let start = Instant::now();
        let signals = self.engine.compute(input, self.config.threshold);
        telemetry::record_latency(LatencyMetric::SignalComputation, start.elapsed());

        telemetry::increment_counter(CounterMetric::ComputeRequests, 1);
        telemetry::increment_counter(
            CounterMetric::CandidatesScored,
            input.candidates.len() as u64,
        );
        telemetry::increment_counter(CounterMetric::SignalsEmitted, signals.len() as u64);

        tracing::debug!(
            match_id = %input.id,
            candidates = input.candidates.len(),
            signals = signals.len(),
            threshold = %self.config.threshold,
            "Scored match"
        );

        Ok(signals)
    }
}
