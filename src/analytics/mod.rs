//! Decision-support analytics derived from the value and loan trajectories

mod lease;
mod risk;
mod scoring;
mod tco;

pub use lease::{lease_monthly_payment, LeaseComparison};
pub use risk::{equity, upside_down_years, GapAdvice};
pub use scoring::{buy_score, is_low_depreciation, remaining_value_pct, BuyScoreTier};
pub use tco::CostOfOwnership;

use crate::assumptions::Assumptions;
use crate::projection::{
    drive_off_loss, LoanSchedule, LoanTrajectory, ValueTrajectory, PROJECTION_YEARS,
    TRAJECTORY_POINTS,
};
use crate::vehicle::{FinancingInputs, VehicleProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything derived from one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Immediate loss at purchase, reported separately from year-1 depreciation
    pub drive_off_loss: f64,

    /// Value lost in each projection year
    pub yearly_loss_deltas: [f64; PROJECTION_YEARS],

    /// Years where the loan balance exceeds the vehicle value
    pub upside_down_years: BTreeSet<usize>,

    /// Value minus balance per year
    pub equity: [f64; TRAJECTORY_POINTS],

    /// Value remaining at the end of the horizon, percent of price
    pub remaining_value_pct: f64,

    pub low_depreciation_vehicle: bool,
    pub buy_score_tier: BuyScoreTier,

    pub lease: LeaseComparison,
    pub gap: GapAdvice,
    pub cost_of_ownership: CostOfOwnership,

    /// Market value minus purchase price, when a market value was given
    pub purchase_discount: Option<f64>,
}

impl AnalyticsResult {
    pub fn lease_monthly_payment(&self) -> f64 {
        self.lease.lease_monthly
    }

    pub fn total_cost_of_ownership(&self) -> f64 {
        self.cost_of_ownership.total()
    }

    pub fn first_upside_down_year(&self) -> Option<usize> {
        self.upside_down_years.iter().next().copied()
    }

    pub fn is_upside_down(&self) -> bool {
        !self.upside_down_years.is_empty()
    }
}

/// Join the two trajectories with the raw inputs
///
/// `loan` is `None` when nothing was financed; interest and the buy-side
/// monthly payment then default to absent/zero rather than failing.
pub fn aggregate(
    assumptions: &Assumptions,
    values: &ValueTrajectory,
    loan_trajectory: &LoanTrajectory,
    loan: Option<&LoanSchedule>,
    inputs: &FinancingInputs,
    profile: &VehicleProfile,
) -> AnalyticsResult {
    let remaining_pct = remaining_value_pct(values);
    let low_dep = is_low_depreciation(&assumptions.low_depreciation, profile);

    let lease = LeaseComparison::compare(
        lease_monthly_payment(inputs.purchase_price, &inputs.lease),
        loan.map(|l| l.monthly_payment),
    );

    let cost_of_ownership = CostOfOwnership::estimate(
        &assumptions.ownership,
        values.total_depreciation(),
        loan.map_or(0.0, LoanSchedule::total_interest),
        profile.annual_distance,
        PROJECTION_YEARS as u32,
    );

    AnalyticsResult {
        drive_off_loss: drive_off_loss(
            &assumptions.depreciation,
            inputs.purchase_price,
            profile.condition,
        ),
        yearly_loss_deltas: values.yearly_losses(),
        upside_down_years: upside_down_years(values, loan_trajectory),
        equity: equity(values, loan_trajectory),
        remaining_value_pct: remaining_pct,
        low_depreciation_vehicle: low_dep,
        buy_score_tier: buy_score(&assumptions.scoring, remaining_pct, low_dep, profile.condition),
        lease,
        gap: GapAdvice::assess(&assumptions.gap, inputs.purchase_price, inputs.down_payment),
        cost_of_ownership,
        purchase_discount: (inputs.market_value > 0.0)
            .then(|| inputs.market_value - inputs.purchase_price),
    }
}
