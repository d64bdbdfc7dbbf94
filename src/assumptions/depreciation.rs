//! Depreciation assumptions: annual rate schedules, mileage penalty and drive-off loss

use crate::projection::PROJECTION_YEARS;
use crate::vehicle::Condition;
use serde::{Deserialize, Serialize};

/// Annual depreciation rates by projection year
///
/// One fractional rate per projection year (index 0 = year 1). Rates are not
/// capped: a mileage penalty on top of a steep schedule can push a rate past
/// typical bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    rates: [f64; PROJECTION_YEARS],
    /// Whether the high-mileage penalty was added to every rate
    pub mileage_penalty_applied: bool,
}

impl RateSchedule {
    pub fn new(rates: [f64; PROJECTION_YEARS], mileage_penalty_applied: bool) -> Self {
        Self {
            rates,
            mileage_penalty_applied,
        }
    }

    /// Get the rate for a projection year (1-indexed)
    pub fn get_rate(&self, year: usize) -> f64 {
        if year == 0 {
            return 0.0;
        }
        self.rates.get(year - 1).copied().unwrap_or(0.0)
    }

    pub fn rates(&self) -> &[f64; PROJECTION_YEARS] {
        &self.rates
    }
}

/// Depreciation policy constants
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationAssumptions {
    /// Base schedule for new vehicles (heavy first-year drop)
    pub new_rates: [f64; PROJECTION_YEARS],

    /// Base schedule for used vehicles, 2+ years old (no first-year cliff)
    pub used_rates: [f64; PROJECTION_YEARS],

    /// Annual distance above which the mileage penalty applies (strictly greater)
    pub mileage_threshold: f64,

    /// Flat amount added to every annual rate when over the threshold
    pub mileage_penalty: f64,

    /// Immediate loss at purchase as a fraction of price, new vehicles
    pub drive_off_rate_new: f64,

    /// Immediate loss at purchase as a fraction of price, used vehicles
    pub drive_off_rate_used: f64,
}

impl Default for DepreciationAssumptions {
    fn default() -> Self {
        Self {
            new_rates: [
                0.25, // Year 1
                0.18, // Year 2
                0.16, // Year 3
                0.14, // Year 4
                0.12, // Year 5
            ],
            used_rates: [
                0.10, // Year 1
                0.12, // Year 2
                0.12, // Year 3
                0.11, // Year 4
                0.10, // Year 5
            ],
            mileage_threshold: 15_000.0,
            mileage_penalty: 0.03,
            drive_off_rate_new: 0.12,
            drive_off_rate_used: 0.08,
        }
    }
}

impl DepreciationAssumptions {
    /// Base schedule before any mileage adjustment
    pub fn base_rates(&self, condition: Condition) -> [f64; PROJECTION_YEARS] {
        match condition {
            Condition::New => self.new_rates,
            Condition::Used => self.used_rates,
        }
    }

    /// Drive-off loss rate for the vehicle's condition
    pub fn drive_off_rate(&self, condition: Condition) -> f64 {
        match condition {
            Condition::New => self.drive_off_rate_new,
            Condition::Used => self.drive_off_rate_used,
        }
    }

    /// Check if annual usage triggers the mileage penalty
    pub fn is_high_mileage(&self, annual_distance: f64) -> bool {
        annual_distance > self.mileage_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_schedule_lookup() {
        let schedule = RateSchedule::new(DepreciationAssumptions::default().new_rates, false);

        assert_eq!(schedule.get_rate(1), 0.25);
        assert_eq!(schedule.get_rate(5), 0.12);
        assert_eq!(schedule.get_rate(0), 0.0);
        assert_eq!(schedule.get_rate(6), 0.0);
    }

    #[test]
    fn test_drive_off_rates() {
        let dep = DepreciationAssumptions::default();

        assert_eq!(dep.drive_off_rate(Condition::New), 0.12);
        assert_eq!(dep.drive_off_rate(Condition::Used), 0.08);
    }

    #[test]
    fn test_high_mileage_is_strict() {
        let dep = DepreciationAssumptions::default();

        assert!(!dep.is_high_mileage(15_000.0));
        assert!(dep.is_high_mileage(15_000.5));
        assert!(!dep.is_high_mileage(0.0));
    }
}
