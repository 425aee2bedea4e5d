//! Serve command implementation

use super::parse_threshold;
use crate::api::{self, AppState};
use crate::config::Config;
use clap::Args;
use rust_decimal::Decimal;
use std::net::SocketAddr;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on, overrides config and EDGE_LISTEN_ADDR
    #[arg(long)]
    pub listen: Option<SocketAddr>,

    /// Minimum edge percentage, overrides config and EDGE_THRESHOLD
    #[arg(long, allow_negative_numbers = true, value_parser = parse_threshold)]
    pub threshold: Option<Decimal>,
}

impl ServeArgs {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(addr) = self.listen {
            config.server.listen_addr = addr;
        }
        if let Some(threshold) = self.threshold {
            config.engine.threshold = threshold;
        }
    }

    pub async fn execute(&self, mut config: Config) -> anyhow::Result<()> {
        self.apply(&mut config);
        api::serve(config.server.listen_addr, AppState::new(config.engine)).await
    }
}
