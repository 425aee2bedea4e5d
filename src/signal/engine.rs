//! Edge detection against the consensus price

use super::Signal;
use crate::model::{Candidate, FairPriceModel, MatchInput, MeanModel};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Decimal places kept on the fair price
pub const FAIR_PRICE_DP: u32 = 3;
/// Decimal places kept on the edge percentage
pub const EDGE_PERCENT_DP: u32 = 2;

/// Scores every quote of a match against the model's fair price
///
/// Holds no state besides the model, so one engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SignalEngine<M: FairPriceModel = MeanModel> {
    model: M,
}

impl SignalEngine<MeanModel> {
    /// Engine using the equal-weight mean
    pub fn mean() -> Self {
        Self::new(MeanModel::new())
    }
}

impl<M: FairPriceModel> SignalEngine<M> {
    /// Create a new signal engine
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Signals for every quote whose edge is at least `threshold` percent
    ///
    /// Output keeps input order. Quotes whose edge is undefined (zero fair
    /// price, overflow) are never emitted.
    pub fn compute(&self, input: &MatchInput, threshold: Decimal) -> Vec<Signal> {
        if input.candidates.is_empty() {
            return Vec::new();
        }

        let Some(fair) = self.model.fair_price(&input.candidates) else {
            return Vec::new();
        };
        let fair_rounded = round_half_away(fair, FAIR_PRICE_DP);

        input
            .candidates
            .iter()
            .filter_map(|candidate| {
                let edge = self.edge_of(candidate, fair)?;
                (edge >= threshold).then(|| Signal {
                    match_id: input.id.clone(),
                    bookmaker: candidate.bookmaker.clone(),
                    team: candidate.team.clone(),
                    offered: candidate.offered,
                    fair: fair_rounded,
                    edge_percent: round_half_away(edge, EDGE_PERCENT_DP),
                })
            })
            .collect()
    }

    /// Unrounded edge of a single candidate against a known fair price
    pub fn edge_of(&self, candidate: &Candidate, fair: Decimal) -> Option<Decimal> {
        edge_percent(candidate.offered, fair)
    }
}

/// Score a match with the mean model
pub fn compute(input: &MatchInput, threshold: Decimal) -> Vec<Signal> {
    SignalEngine::mean().compute(input, threshold)
}

/// ((offered / fair) - 1) * 100
pub fn edge_percent(offered: Decimal, fair: Decimal) -> Option<Decimal> {
    offered
        .checked_div(fair)?
        .checked_sub(Decimal::ONE)?
        .checked_mul(dec!(100))
}

/// Round to `dp` places, halves away from zero
pub fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
