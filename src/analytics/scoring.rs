//! Buy score from remaining value and the curated low-depreciation list

use crate::assumptions::{LowDepreciationList, ScoringThresholds};
use crate::projection::ValueTrajectory;
use crate::vehicle::{Condition, VehicleProfile};
use serde::{Deserialize, Serialize};

/// How well the purchase is expected to hold its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyScoreTier {
    Smart,
    Caution,
    HighRisk,
}

/// Value left at the end of the horizon, percent of purchase price
pub fn remaining_value_pct(values: &ValueTrajectory) -> f64 {
    if values.initial() <= 0.0 {
        return 0.0;
    }
    values.terminal() / values.initial() * 100.0
}

/// Score a purchase
///
/// Smart when more than `smart_above_pct` of value remains, or when a used
/// vehicle is on the curated low-depreciation list. Thresholds are strict, so
/// exactly 40% remaining is HighRisk.
pub fn buy_score(
    thresholds: &ScoringThresholds,
    remaining_pct: f64,
    low_depreciation_vehicle: bool,
    condition: Condition,
) -> BuyScoreTier {
    if remaining_pct > thresholds.smart_above_pct
        || (low_depreciation_vehicle && condition == Condition::Used)
    {
        BuyScoreTier::Smart
    } else if remaining_pct > thresholds.caution_above_pct {
        BuyScoreTier::Caution
    } else {
        BuyScoreTier::HighRisk
    }
}

/// Check the vehicle against the curated list
pub fn is_low_depreciation(list: &LowDepreciationList, profile: &VehicleProfile) -> bool {
    list.contains(&profile.make, &profile.model)
}
