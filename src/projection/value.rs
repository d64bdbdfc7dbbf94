//! Vehicle value projection

use super::{PROJECTION_YEARS, TRAJECTORY_POINTS};
use crate::assumptions::{DepreciationAssumptions, RateSchedule};
use crate::vehicle::Condition;
use serde::{Deserialize, Serialize};

/// Projected vehicle value at purchase (year 0) and at each year-end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTrajectory {
    values: [f64; TRAJECTORY_POINTS],
}

impl ValueTrajectory {
    pub fn values(&self) -> &[f64; TRAJECTORY_POINTS] {
        &self.values
    }

    pub fn initial(&self) -> f64 {
        self.values[0]
    }

    /// Value at the end of the horizon
    pub fn terminal(&self) -> f64 {
        self.values[PROJECTION_YEARS]
    }

    /// Value lost during each projection year, `V[i-1] - V[i]`
    pub fn yearly_losses(&self) -> [f64; PROJECTION_YEARS] {
        let mut losses = [0.0; PROJECTION_YEARS];
        for (idx, loss) in losses.iter_mut().enumerate() {
            *loss = self.values[idx] - self.values[idx + 1];
        }
        losses
    }

    /// Total value lost over the horizon
    pub fn total_depreciation(&self) -> f64 {
        self.initial() - self.terminal()
    }
}

/// Compound the schedule forward from the purchase price
pub fn project_value(purchase_price: f64, rates: &RateSchedule) -> ValueTrajectory {
    let mut values = [0.0; TRAJECTORY_POINTS];
    values[0] = purchase_price;
    for year in 1..TRAJECTORY_POINTS {
        values[year] = values[year - 1] * (1.0 - rates.get_rate(year));
    }
    ValueTrajectory { values }
}

/// Immediate loss the moment the vehicle leaves the lot
///
/// Reported on its own; the value trajectory does not subtract it again.
pub fn drive_off_loss(
    assumptions: &DepreciationAssumptions,
    purchase_price: f64,
    condition: Condition,
) -> f64 {
    purchase_price * assumptions.drive_off_rate(condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::select_rates;
    use approx::assert_relative_eq;

    fn new_schedule() -> RateSchedule {
        select_rates(&DepreciationAssumptions::default(), Condition::New, 12_000.0)
    }

    #[test]
    fn test_reference_new_vehicle_trajectory() {
        let values = project_value(45_000.0, &new_schedule());

        let expected = [45_000.0, 33_750.0, 27_675.0, 23_247.0, 19_992.42, 17_593.3296];
        for (got, want) in values.values().iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
        assert_eq!(values.initial(), 45_000.0);
        assert_relative_eq!(values.terminal(), 17_593.3296, max_relative = 1e-12);
    }

    #[test]
    fn test_yearly_losses() {
        let values = project_value(45_000.0, &new_schedule());
        let losses = values.yearly_losses();

        assert_relative_eq!(losses[0], 11_250.0, max_relative = 1e-12);
        assert_relative_eq!(losses[1], 6_075.0, max_relative = 1e-12);
        assert!(losses.iter().all(|l| *l >= 0.0));
        assert_relative_eq!(losses.iter().sum::<f64>(), values.total_depreciation(), max_relative = 1e-12);
    }

    #[test]
    fn test_trajectory_non_increasing_and_non_negative() {
        let schedules = [
            RateSchedule::new([0.99, 0.5, 0.01, 0.3, 0.7], false),
            RateSchedule::new([0.01; 5], false),
            select_rates(&DepreciationAssumptions::default(), Condition::Used, 30_000.0),
        ];
        for price in [1.0, 10_000.0, 300_000.0] {
            for schedule in &schedules {
                let values = project_value(price, schedule);
                for pair in values.values().windows(2) {
                    assert!(pair[1] <= pair[0]);
                    assert!(pair[1] >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_drive_off_loss() {
        let dep = DepreciationAssumptions::default();

        assert_relative_eq!(drive_off_loss(&dep, 45_000.0, Condition::New), 5_400.0, max_relative = 1e-12);
        assert_relative_eq!(drive_off_loss(&dep, 45_000.0, Condition::Used), 3_600.0, max_relative = 1e-12);
    }
}
