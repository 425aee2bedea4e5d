//! Compute command implementation

use super::parse_threshold;
use crate::api::{AppState, ComputeRequest, ComputeResponse};
use crate::config::Config;
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// File holding a `{"match": ...}` request, stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Minimum edge percentage, overrides config and EDGE_THRESHOLD
    #[arg(long, allow_negative_numbers = true, value_parser = parse_threshold)]
    pub threshold: Option<Decimal>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

impl ComputeArgs {
    pub async fn execute(&self, config: Config) -> anyhow::Result<()> {
        let raw = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                buf
            }
        };

        let response = self.run(&config, &raw)?;
        let out = if self.pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", out)?;
        Ok(())
    }

    /// Score a raw request body under the given configuration
    pub fn run(&self, config: &Config, raw: &str) -> anyhow::Result<ComputeResponse> {
        let request = ComputeRequest::from_slice(raw.as_bytes())
            .context("Input is not a valid compute request")?;

        let mut engine_config = config.engine.clone();
        if let Some(threshold) = self.threshold {
            engine_config.threshold = threshold;
        }

        let signals = AppState::new(engine_config).score(&request.match_input)?;
        tracing::info!(
            match_id = %request.match_input.id,
            signals = signals.len(),
            "Computed signals"
        );

        Ok(ComputeResponse { signals })
    }
}
