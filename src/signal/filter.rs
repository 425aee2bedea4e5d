//! Input filtering
//!
//! The engine scores whatever it is given. This filter lets the caller turn
//! away quotes that cannot produce a meaningful edge before scoring.

use crate::model::MatchInput;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Result of applying the filter to a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResult {
    /// Match may be scored
    Pass,
    /// Match rejected
    Reject(RejectReason),
}

/// Reason for rejecting a match
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RejectReason {
    /// Offered price is zero or negative
    #[error("candidate {index} has non-positive offered price {offered}")]
    NonPositivePrice { index: usize, offered: Decimal },
    /// Match identifier is empty
    #[error("match id is empty")]
    EmptyMatchId,
}

impl RejectReason {
    /// Short label for metrics
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::NonPositivePrice { .. } => "non_positive_price",
            RejectReason::EmptyMatchId => "empty_match_id",
        }
    }
}

/// Checks a match before it reaches the engine
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceFilter;

impl PriceFilter {
    /// Create a new price filter
    pub fn new() -> Self {
        Self
    }

    /// Apply all checks, reporting the first failure
    pub fn apply(&self, input: &MatchInput) -> FilterResult {
        if input.id.is_empty() {
            return FilterResult::Reject(RejectReason::EmptyMatchId);
        }

        if let Some((index, offered)) = input
            .offered_prices()
            .enumerate()
            .find(|(_, offered)| *offered <= Decimal::ZERO)
        {
            return FilterResult::Reject(RejectReason::NonPositivePrice { index, offered });
        }

        FilterResult::Pass
    }
}
