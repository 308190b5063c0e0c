//! Reward-points scoring for receipts.
//!
//! The total is the unweighted sum of seven independent rules (see [`rules`]).
//! Scoring owns no state: the same receipt always yields the same points.

pub mod rules;

use receipts_core::Receipt;

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl ScoreBreakdown {
    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer_name: rules::retailer_name_points(&receipt.retailer),
        round_dollar: rules::round_dollar_points(&receipt.total),
        quarter_multiple: rules::quarter_multiple_points(&receipt.total),
        item_pairs: rules::item_pair_points(&receipt.items),
        item_descriptions: rules::item_description_points(&receipt.items),
        odd_day: rules::odd_day_points(&receipt.purchase_date),
        afternoon: rules::afternoon_points(&receipt.purchase_time),
    }
}

pub fn score(receipt: &Receipt) -> u64 {
    let breakdown = score_breakdown(receipt);
    tracing::debug!(?breakdown, "scored receipt");
    breakdown.total()
}
