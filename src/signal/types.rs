//! Signal types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A flagged edge opportunity for one bookmaker/team quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Match the quote belongs to
    pub match_id: String,
    /// Bookmaker offering the price
    pub bookmaker: String,
    /// Team the price is offered on
    pub team: String,
    /// Offered price, as quoted
    pub offered: Decimal,
    /// Consensus price, 3 decimal places
    pub fair: Decimal,
    /// Percentage above the consensus price, 2 decimal places
    pub edge_percent: Decimal,
}
