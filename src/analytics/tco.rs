//! Total cost of ownership over the projection horizon

use crate::assumptions::OwnershipCosts;
use serde::{Deserialize, Serialize};

/// Components of the ownership cost estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostOfOwnership {
    pub depreciation: f64,
    pub interest: f64,
    pub insurance: f64,
    pub fuel: f64,
    pub maintenance: f64,
}

impl CostOfOwnership {
    /// Estimate costs over `years`
    ///
    /// `total_interest` is zero when nothing was financed.
    pub fn estimate(
        costs: &OwnershipCosts,
        depreciation: f64,
        total_interest: f64,
        annual_distance: f64,
        years: u32,
    ) -> Self {
        Self {
            depreciation,
            interest: total_interest,
            insurance: costs.annual_insurance * years as f64,
            fuel: costs.fuel_estimate(annual_distance, years),
            maintenance: costs.annual_maintenance * years as f64,
        }
    }

    pub fn total(&self) -> f64 {
        self.depreciation + self.interest + self.insurance + self.fuel + self.maintenance
    }

    /// Everything except depreciation
    pub fn running_costs(&self) -> f64 {
        self.total() - self.depreciation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_estimate() {
        let tco = CostOfOwnership::estimate(
            &OwnershipCosts::default(),
            45_000.0 - 17_593.3296,
            8_463.236,
            12_000.0,
            5,
        );

        assert_relative_eq!(tco.insurance, 10_000.0);
        assert_relative_eq!(tco.fuel, 9_000.0, max_relative = 1e-12);
        assert_relative_eq!(tco.maintenance, 4_000.0);
        assert_relative_eq!(tco.total(), 27_406.6704 + 8_463.236 + 23_000.0, max_relative = 1e-12);
        assert_relative_eq!(tco.running_costs(), 8_463.236 + 23_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_cash_purchase_has_no_interest() {
        let tco = CostOfOwnership::estimate(&OwnershipCosts::default(), 10_000.0, 0.0, 0.0, 5);
        assert_eq!(tco.interest, 0.0);
        assert_eq!(tco.fuel, 0.0);
        assert_relative_eq!(tco.total(), 24_000.0);
    }
}
