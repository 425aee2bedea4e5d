//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Time spent scoring one match
    SignalComputation,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Matches submitted for scoring
    ComputeRequests,
    /// Signals returned to callers
    SignalsEmitted,
    /// Candidates scored
    CandidatesScored,
}

impl LatencyMetric {
    fn name(self) -> &'static str {
        match self {
            LatencyMetric::SignalComputation => "edge_signal_computation_seconds",
        }
    }
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::ComputeRequests => "edge_compute_requests_total",
            CounterMetric::SignalsEmitted => "edge_signals_emitted_total",
            CounterMetric::CandidatesScored => "edge_candidates_scored_total",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    ::metrics::histogram!(metric.name()).record(duration.as_secs_f64());
}

/// Increase a counter
pub fn increment_counter(metric: CounterMetric, value: u64) {
    ::metrics::counter!(metric.name()).increment(value);
}

/// Count a request turned away before scoring
pub fn record_rejection(reason: &'static str) {
    ::metrics::counter!("edge_rejected_requests_total", "reason" => reason).increment(1);
}

/// Serve Prometheus metrics over HTTP on the given port
///
/// Must be called from within a tokio runtime.
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;

    tracing::info!(port, "Metrics exporter listening");
    Ok(())
}
