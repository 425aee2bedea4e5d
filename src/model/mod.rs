//! Fair price model module
//!
//! Quote types and the consensus price calculation they feed

mod mean;
mod price;

pub use mean::MeanModel;
pub use price::deserialize_offered;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bookmaker's quoted price for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Bookmaker identifier
    #[serde(default)]
    pub bookmaker: String,
    /// Team the price is offered on
    #[serde(default)]
    pub team: String,
    /// Offered decimal price, zero when absent
    #[serde(default, deserialize_with = "deserialize_offered")]
    pub offered: Decimal,
}

impl Candidate {
    /// Create a new candidate quote
    pub fn new(bookmaker: impl Into<String>, team: impl Into<String>, offered: Decimal) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            team: team.into(),
            offered,
        }
    }
}

/// All competing quotes for a single match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInput {
    /// Match identifier
    #[serde(default)]
    pub id: String,
    /// Quotes in input order
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl MatchInput {
    /// Create a match from its identifier and quotes
    pub fn new(id: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            id: id.into(),
            candidates,
        }
    }

    /// Offered prices in input order
    pub fn offered_prices(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.candidates.iter().map(|c| c.offered)
    }
}

/// Trait for consensus price implementations
pub trait FairPriceModel: Send + Sync {
    /// Reference price for a set of quotes, `None` when no price is computable
    fn fair_price(&self, candidates: &[Candidate]) -> Option<Decimal>;
}
