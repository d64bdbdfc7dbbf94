//! Financing grid: down payment fractions x loan terms
//!
//! Evaluates every combination in parallel so a buyer can see which
//! structures keep the loan above water.

use super::engine::ProjectionEngine;
use crate::analytics::BuyScoreTier;
use crate::error::EvaluationError;
use crate::vehicle::{FinancingInputs, VehicleProfile};
use rayon::prelude::*;
use serde::Serialize;

/// Down payment fractions of price used when none are given
pub const DEFAULT_DOWN_FRACTIONS: [f64; 6] = [0.0, 0.10, 0.20, 0.30, 0.40, 0.50];

/// Loan terms in months used when none are given
pub const DEFAULT_TERMS: [u32; 5] = [36, 48, 60, 72, 84];

/// Summary of one financing structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub down_fraction: f64,
    pub down_payment: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// Number of projection years spent upside down
    pub upside_down_years: usize,
    pub first_upside_down_year: Option<usize>,
    pub buy_score_tier: BuyScoreTier,
    pub gap_recommended: bool,
    pub total_cost_of_ownership: f64,
}

impl ProjectionEngine {
    /// Evaluate every (down fraction, term) pair against the base inputs
    ///
    /// Rows come back ordered by down fraction, then term. Any invalid
    /// combination fails the whole sweep.
    pub fn sweep(
        &self,
        profile: &VehicleProfile,
        base: &FinancingInputs,
        down_fractions: &[f64],
        terms: &[u32],
    ) -> Result<Vec<SweepRow>, EvaluationError> {
        let grid: Vec<(f64, u32)> = down_fractions
            .iter()
            .flat_map(|&fraction| terms.iter().map(move |&term| (fraction, term)))
            .collect();

        grid.par_iter()
            .map(|&(fraction, term)| -> Result<SweepRow, EvaluationError> {
                let inputs = FinancingInputs {
                    down_payment: base.purchase_price * fraction,
                    term_months: term,
                    ..base.clone()
                };
                let report = self.evaluate(profile, &inputs)?;
                let analytics = &report.analytics;
                Ok(SweepRow {
                    down_fraction: fraction,
                    down_payment: inputs.down_payment,
                    term_months: term,
                    monthly_payment: report.monthly_payment().unwrap_or(0.0),
                    total_interest: analytics.cost_of_ownership.interest,
                    upside_down_years: analytics.upside_down_years.len(),
                    first_upside_down_year: analytics.first_upside_down_year(),
                    buy_score_tier: analytics.buy_score_tier,
                    gap_recommended: analytics.gap.recommended,
                    total_cost_of_ownership: analytics.total_cost_of_ownership(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::error::Field;
    use crate::projection::ProjectionConfig;
    use crate::vehicle::{Condition, YearRange};

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(
            Assumptions::default_policy(),
            ProjectionConfig {
                supported_years: YearRange::new(2011, 2025),
            },
        )
    }

    fn profile() -> VehicleProfile {
        VehicleProfile::new("Ford", "Mustang", 2025, Condition::New, 12_000.0)
    }

    #[test]
    fn test_sweep_grid_order_and_size() {
        let base = FinancingInputs::new(45_000.0, 0.0, 60, 7.0);
        let rows = engine()
            .sweep(&profile(), &base, &DEFAULT_DOWN_FRACTIONS, &DEFAULT_TERMS)
            .unwrap();

        assert_eq!(rows.len(), DEFAULT_DOWN_FRACTIONS.len() * DEFAULT_TERMS.len());
        assert_eq!((rows[0].down_fraction, rows[0].term_months), (0.0, 36));
        assert_eq!((rows[1].down_fraction, rows[1].term_months), (0.0, 48));
        assert_eq!(rows.last().map(|r| r.term_months), Some(84));
    }

    #[test]
    fn test_more_down_reduces_risk() {
        let base = FinancingInputs::new(45_000.0, 0.0, 60, 7.0);
        let rows = engine().sweep(&profile(), &base, &[0.0, 0.5], &[60]).unwrap();

        assert_eq!(rows[0].first_upside_down_year, Some(1));
        assert!(rows[0].gap_recommended);
        assert_eq!(rows[1].upside_down_years, 0);
        assert!(!rows[1].gap_recommended);
        assert!(rows[1].total_interest < rows[0].total_interest);
        assert!(rows[1].monthly_payment < rows[0].monthly_payment);
    }

    #[test]
    fn test_full_cash_row_has_no_payment() {
        let base = FinancingInputs::new(45_000.0, 0.0, 60, 7.0);
        let rows = engine().sweep(&profile(), &base, &[1.0], &[60]).unwrap();

        assert_eq!(rows[0].monthly_payment, 0.0);
        assert_eq!(rows[0].total_interest, 0.0);
    }

    #[test]
    fn test_invalid_term_fails_sweep() {
        let base = FinancingInputs::new(45_000.0, 0.0, 60, 7.0);
        let err = engine().sweep(&profile(), &base, &[0.1], &[60, 0]).unwrap_err();
        assert_eq!(err.field(), Field::TermMonths);
    }
}
