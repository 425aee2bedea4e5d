//! Equal-weight consensus price
//!
//! Every quote counts as one estimate of the true price:
//! fair = (p1 + p2 + ... + pn) / n

use super::{Candidate, FairPriceModel};
use rust_decimal::Decimal;

/// Arithmetic mean of all offered prices
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanModel;

impl MeanModel {
    /// Create a new mean model
    pub fn new() -> Self {
        Self
    }
}

impl FairPriceModel for MeanModel {
    fn fair_price(&self, candidates: &[Candidate]) -> Option<Decimal> {
        if candidates.is_empty() {
            return None;
        }

        let mut sum = Decimal::ZERO;
        for candidate in candidates {
            sum = sum.checked_add(candidate.offered)?;
        }

        sum.checked_div(Decimal::from(candidates.len()))
    }
}
