//! Telemetry module
//!
//! Metrics and logging

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{
    increment_counter, install_exporter, record_latency, record_rejection, CounterMetric,
    LatencyMetric,
};

use crate::config::TelemetryConfig;

/// Initialize logging and, when a port is configured, the metrics exporter
pub fn init_telemetry(config: &TelemetryConfig, with_exporter: bool) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)?;

    if with_exporter {
        if let Some(port) = config.metrics_port {
            install_exporter(port)?;
        }
    }

    Ok(())
}
