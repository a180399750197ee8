use super::rules;
use crate::domain::points::Points;
use crate::domain::receipt::Receipt;
use serde::Serialize;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub retailer: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub over_threshold: Points,
    pub item_pairs: Points,
    pub descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl ScoreBreakdown {
    pub fn total(&self) -> Points {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.over_threshold,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .sum()
    }
}

/// Evaluates every rule against the receipt.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer: rules::retailer_name(receipt),
        round_dollar: rules::round_dollar(receipt),
        quarter_multiple: rules::quarter_multiple(receipt),
        over_threshold: rules::over_threshold(receipt),
        item_pairs: rules::item_pairs(receipt),
        descriptions: rules::descriptions(receipt),
        odd_day: rules::odd_day(receipt),
        afternoon: rules::afternoon(receipt),
    }
}

/// Computes the loyalty points for a receipt.
///
/// Total and deterministic: malformed fields only zero the rules that read
/// them, and the same receipt always scores the same.
pub fn score(receipt: &Receipt) -> Points {
    breakdown(receipt).total()
}
