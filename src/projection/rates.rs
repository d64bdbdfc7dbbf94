//! Annual depreciation rate selection

use crate::assumptions::{DepreciationAssumptions, RateSchedule};
use crate::vehicle::Condition;
use log::warn;

/// Select the 5-year depreciation schedule for a vehicle's condition and usage
///
/// Above the mileage threshold a flat penalty is added to every year's rate,
/// regardless of how far over the threshold the usage is.
pub fn select_rates(
    assumptions: &DepreciationAssumptions,
    condition: Condition,
    annual_distance: f64,
) -> RateSchedule {
    let mut rates = assumptions.base_rates(condition);

    if !assumptions.is_high_mileage(annual_distance) {
        return RateSchedule::new(rates, false);
    }

    warn!(
        "High usage ({} per year) accelerates depreciation by {:.0}% per year",
        annual_distance,
        assumptions.mileage_penalty * 100.0
    );
    for rate in rates.iter_mut() {
        *rate += assumptions.mileage_penalty;
    }
    RateSchedule::new(rates, true)
}
