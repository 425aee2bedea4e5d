//! edge-engine: consensus fair-price edge detection for bookmaker quotes
//!
//! This library provides the core components for:
//! - Consensus (fair) price calculation over one match's quotes
//! - Edge scoring and threshold filtering of each quote
//! - Optional input filtering of non-positive prices
//! - HTTP API and CLI transport around the engine
//! - Logging and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod model;
pub mod signal;
pub mod telemetry;

pub use model::{Candidate, MatchInput};
pub use signal::{compute, Signal, SignalEngine};
