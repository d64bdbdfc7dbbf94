//! Lease payment estimate and lease-vs-buy comparison

use crate::vehicle::LeaseTerms;
use serde::{Deserialize, Serialize};

/// Monthly lease payment: depreciation charge plus finance charge
///
/// `price * (1 - residual%) / term + price * money_factor`
pub fn lease_monthly_payment(purchase_price: f64, terms: &LeaseTerms) -> f64 {
    let depreciation = purchase_price * (1.0 - terms.residual_pct / 100.0) / terms.term_months as f64;
    let finance = purchase_price * terms.money_factor;
    depreciation + finance
}

/// Side-by-side monthly cost of leasing and buying
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseComparison {
    pub lease_monthly: f64,
    /// Loan payment, absent when nothing is financed
    pub buy_monthly: Option<f64>,
    /// `buy_monthly - lease_monthly`; positive when leasing is cheaper per month
    pub monthly_difference: Option<f64>,
}

impl LeaseComparison {
    pub fn compare(lease_monthly: f64, buy_monthly: Option<f64>) -> Self {
        Self {
            lease_monthly,
            buy_monthly,
            monthly_difference: buy_monthly.map(|buy| buy - lease_monthly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_lease_payment() {
        // 45,000 * 0.42 / 36 + 45,000 * 0.0025
        let payment = lease_monthly_payment(45_000.0, &LeaseTerms::default());
        assert_relative_eq!(payment, 637.5, max_relative = 1e-12);
    }

    #[test]
    fn test_full_residual_leaves_finance_charge() {
        let terms = LeaseTerms {
            residual_pct: 100.0,
            term_months: 24,
            money_factor: 0.002,
        };
        assert_relative_eq!(lease_monthly_payment(30_000.0, &terms), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn test_compare_with_and_without_loan() {
        let with_loan = LeaseComparison::compare(637.5, Some(891.05));
        assert_relative_eq!(with_loan.monthly_difference.unwrap(), 253.55, max_relative = 1e-9);

        let cash = LeaseComparison::compare(637.5, None);
        assert_eq!(cash.buy_monthly, None);
        assert_eq!(cash.monthly_difference, None);
    }
}
