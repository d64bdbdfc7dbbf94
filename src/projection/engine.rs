//! Evaluation of a single vehicle purchase

use super::amortization::{amortize, LoanSchedule, LoanTrajectory};
use super::rates::select_rates;
use super::value::{project_value, ValueTrajectory};
use super::TRAJECTORY_POINTS;
use crate::analytics::{aggregate, AnalyticsResult};
use crate::assumptions::{Assumptions, RateSchedule};
use crate::error::EvaluationError;
use crate::vehicle::{Condition, FinancingInputs, VehicleProfile, YearRange};
use log::debug;
use serde::{Deserialize, Serialize};

/// Configuration for the projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Model years accepted by input validation
    pub supported_years: YearRange,
}

/// Trajectories and analytics for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub profile: VehicleProfile,
    pub rates: RateSchedule,
    pub value_trajectory: ValueTrajectory,
    /// All zeros when nothing was financed
    pub loan_trajectory: LoanTrajectory,
    /// Absent when the down payment covers the full price
    pub loan: Option<LoanSchedule>,
    pub analytics: AnalyticsResult,
}

impl EvaluationReport {
    /// Calendar year label for each trajectory point, starting at the model year
    pub fn calendar_years(&self) -> [i32; TRAJECTORY_POINTS] {
        let mut years = [self.profile.year; TRAJECTORY_POINTS];
        for (offset, year) in years.iter_mut().enumerate() {
            *year += offset as i32;
        }
        years
    }

    pub fn monthly_payment(&self) -> Option<f64> {
        self.loan.as_ref().map(|l| l.monthly_payment)
    }
}

/// Projection engine
///
/// Holds assumptions and configuration only; every evaluation is
/// independent, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn select_rates(&self, condition: Condition, annual_distance: f64) -> RateSchedule {
        select_rates(&self.assumptions.depreciation, condition, annual_distance)
    }

    /// Validate inputs, project both trajectories and derive the analytics
    pub fn evaluate(
        &self,
        profile: &VehicleProfile,
        inputs: &FinancingInputs,
    ) -> Result<EvaluationReport, EvaluationError> {
        profile.validate(&self.config.supported_years)?;
        inputs.validate()?;

        let rates = self.select_rates(profile.condition, profile.annual_distance);
        let value_trajectory = project_value(inputs.purchase_price, &rates);

        let principal = inputs.loan_principal();
        let loan = if principal > 0.0 {
            Some(amortize(principal, inputs.annual_rate_pct, inputs.term_months))
        } else {
            debug!("Nothing financed for {}, skipping amortization", profile.display_name());
            None
        };
        let loan_trajectory = loan
            .as_ref()
            .map_or_else(LoanTrajectory::no_loan, |l| l.trajectory);

        let analytics = aggregate(
            &self.assumptions,
            &value_trajectory,
            &loan_trajectory,
            loan.as_ref(),
            inputs,
            profile,
        );

        debug!(
            "Evaluated {}: remaining value {:.1}%, tier {:?}, upside down {:?}",
            profile.display_name(),
            analytics.remaining_value_pct,
            analytics.buy_score_tier,
            analytics.upside_down_years
        );

        Ok(EvaluationReport {
            profile: profile.clone(),
            rates,
            value_trajectory,
            loan_trajectory,
            loan,
            analytics,
        })
    }
}
