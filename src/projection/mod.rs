//! Projection engine for vehicle value and loan balance trajectories

mod amortization;
mod engine;
mod rates;
mod sweep;
mod value;

pub use amortization::{amortize, monthly_payment, LoanSchedule, LoanTrajectory};
pub use engine::{EvaluationReport, ProjectionConfig, ProjectionEngine};
pub use rates::select_rates;
pub use sweep::{SweepRow, DEFAULT_DOWN_FRACTIONS, DEFAULT_TERMS};
pub use value::{drive_off_loss, project_value, ValueTrajectory};

pub use crate::assumptions::RateSchedule;

// ============================================================================
// Projection Horizon
// ============================================================================
// Trajectories hold one point per year-end plus the purchase date (year 0).

/// Number of projected years after purchase
pub const PROJECTION_YEARS: usize = 5;

/// Points in a value or balance trajectory (year 0 through year 5)
pub const TRAJECTORY_POINTS: usize = PROJECTION_YEARS + 1;

/// Months simulated per projection year
pub const MONTHS_PER_YEAR: u32 = 12;
