//! CLI interface for edge-engine
//!
//! Provides subcommands for:
//! - `serve`: Run the HTTP API
//! - `compute`: Score one match read from a file or stdin
//! - `config`: Show the effective configuration

mod compute;
mod serve;

pub use compute::ComputeArgs;
pub use serve::ServeArgs;

use crate::config::parse_decimal;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "edge-engine")]
#[command(about = "Flags bookmaker quotes priced above the match consensus")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Score one match and print the signals
    Compute(ComputeArgs),
    /// Show effective configuration
    Config,
}

/// Parse a threshold percentage in plain or scientific notation
pub(crate) fn parse_threshold(raw: &str) -> Result<Decimal, String> {
    parse_decimal(raw).ok_or_else(|| format!("invalid threshold: {raw}"))
}
