//! Deprecia - vehicle depreciation and financing projection engine
//!
//! Projects a vehicle's market value and an amortizing loan balance over a
//! five-year horizon, then derives decision-support metrics from the two
//! trajectories: drive-off loss, upside-down years, buy score, lease payment
//! and total cost of ownership.
//!
//! # Example
//!
//! ```rust,ignore
//! use deprecia::{evaluate, Condition, FinancingInputs, VehicleProfile};
//!
//! let profile = VehicleProfile::new("Toyota", "Tacoma", 2024, Condition::Used, 12_000.0);
//! let inputs = FinancingInputs::new(45_000.0, 4_500.0, 60, 7.0);
//! let report = evaluate(&profile, &inputs)?;
//! println!("Upside down in years: {:?}", report.analytics.upside_down_years);
//! ```

pub mod analytics;
pub mod assumptions;
pub mod error;
pub mod projection;
pub mod vehicle;

pub use analytics::{AnalyticsResult, BuyScoreTier, GapAdvice, LeaseComparison};
pub use assumptions::Assumptions;
pub use error::{EvaluationError, Field, LoaderError};
pub use projection::{
    EvaluationReport, LoanSchedule, LoanTrajectory, ProjectionConfig, ProjectionEngine,
    RateSchedule, ValueTrajectory, PROJECTION_YEARS,
};
pub use vehicle::{Condition, FinancingInputs, LeaseTerms, VehicleProfile, YearRange};

/// Evaluate a single financing scenario with the default policy assumptions
///
/// Convenience wrapper around [`ProjectionEngine::evaluate`] for callers that
/// don't need custom assumptions or a custom supported year range.
pub fn evaluate(
    profile: &VehicleProfile,
    inputs: &FinancingInputs,
) -> Result<EvaluationReport, EvaluationError> {
    ProjectionEngine::new(Assumptions::default_policy(), ProjectionConfig::default())
        .evaluate(profile, inputs)
}
