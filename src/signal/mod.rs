//! Signal generation module
//!
//! Flags quotes priced above the match consensus

mod engine;
mod filter;
mod types;

pub use engine::{
    compute, edge_percent, round_half_away, SignalEngine, EDGE_PERCENT_DP, FAIR_PRICE_DP,
};
pub use filter::{FilterResult, PriceFilter, RejectReason};
pub use types::Signal;
