//! Negative equity detection and GAP coverage advice

use crate::assumptions::GapAssumptions;
use crate::projection::{LoanTrajectory, ValueTrajectory, TRAJECTORY_POINTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Years in which the loan balance exceeds the projected vehicle value
///
/// In any of these years the owner could not sell or trade in without
/// covering a shortfall.
pub fn upside_down_years(values: &ValueTrajectory, loan: &LoanTrajectory) -> BTreeSet<usize> {
    values
        .values()
        .iter()
        .zip(loan.balances())
        .enumerate()
        .filter(|(_, (value, balance))| *balance > *value)
        .map(|(year, _)| year)
        .collect()
}

/// Owner equity per year, value minus balance (negative when upside down)
pub fn equity(values: &ValueTrajectory, loan: &LoanTrajectory) -> [f64; TRAJECTORY_POINTS] {
    let mut equity = [0.0; TRAJECTORY_POINTS];
    for (idx, (value, balance)) in values.values().iter().zip(loan.balances()).enumerate() {
        equity[idx] = value - balance;
    }
    equity
}

/// GAP insurance recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapAdvice {
    /// Down payment is too small to keep the loan above water
    pub recommended: bool,
    /// Typical annual GAP premium
    pub annual_premium: f64,
}

impl GapAdvice {
    pub fn assess(assumptions: &GapAssumptions, purchase_price: f64, down_payment: f64) -> Self {
        Self {
            recommended: assumptions.is_recommended(purchase_price, down_payment),
            annual_premium: assumptions.annual_premium,
        }
    }
}
