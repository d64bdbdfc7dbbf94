//! Vehicle and financing input records

use super::catalog::YearRange;
use crate::error::{EvaluationError, Field};
use serde::{Deserialize, Serialize};

/// Vehicle condition at purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[serde(alias = "New", alias = "NEW")]
    New,
    /// Used, 2+ years old
    #[serde(alias = "Used", alias = "USED")]
    Used,
}

/// Resolved vehicle plus usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub make: String,
    pub model: String,
    /// Model year
    pub year: i32,
    pub condition: Condition,
    /// Expected distance driven per year, in the caller's distance unit
    pub annual_distance: f64,
}

impl VehicleProfile {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        condition: Condition,
        annual_distance: f64,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            condition,
            annual_distance,
        }
    }

    /// "{year} {make} {model}" as shown to the user
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    pub fn validate(&self, years: &YearRange) -> Result<(), EvaluationError> {
        if self.make.trim().is_empty() {
            return Err(EvaluationError::IncompleteVehicle { field: Field::Make });
        }
        if self.model.trim().is_empty() {
            return Err(EvaluationError::IncompleteVehicle { field: Field::Model });
        }
        if !years.contains(self.year) {
            return Err(EvaluationError::invalid(
                Field::Year,
                format!(
                    "{} is outside the supported range {}-{}",
                    self.year, years.earliest, years.latest
                ),
            ));
        }
        if !(self.annual_distance >= 0.0) || !self.annual_distance.is_finite() {
            return Err(EvaluationError::invalid(
                Field::AnnualDistance,
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Lease quote parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseTerms {
    /// Residual value at lease end, percent of price
    pub residual_pct: f64,
    pub term_months: u32,
    /// Lease equivalent of a monthly interest rate
    pub money_factor: f64,
}

impl Default for LeaseTerms {
    fn default() -> Self {
        Self {
            residual_pct: 58.0,
            term_months: 36,
            money_factor: 0.0025,
        }
    }
}

impl LeaseTerms {
    /// Default residual and term with the money factor implied by an APR
    ///
    /// Money factor = APR% / 2400.
    pub fn from_apr(annual_rate_pct: f64) -> Self {
        Self {
            money_factor: annual_rate_pct / 2400.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        if !(0.0..=100.0).contains(&self.residual_pct) {
            return Err(EvaluationError::invalid(
                Field::ResidualPct,
                "must be between 0 and 100",
            ));
        }
        if self.term_months == 0 {
            return Err(EvaluationError::invalid(
                Field::LeaseTermMonths,
                "must be greater than zero",
            ));
        }
        if !(self.money_factor >= 0.0) || !self.money_factor.is_finite() {
            return Err(EvaluationError::invalid(
                Field::MoneyFactor,
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Purchase and loan parameters for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingInputs {
    pub purchase_price: f64,
    /// Current market value of the vehicle; 0 when unknown
    #[serde(default)]
    pub market_value: f64,
    #[serde(default)]
    pub down_payment: f64,
    pub term_months: u32,
    pub annual_rate_pct: f64,
    #[serde(default)]
    pub lease: LeaseTerms,
}

impl FinancingInputs {
    pub fn new(purchase_price: f64, down_payment: f64, term_months: u32, annual_rate_pct: f64) -> Self {
        Self {
            purchase_price,
            market_value: 0.0,
            down_payment,
            term_months,
            annual_rate_pct,
            lease: LeaseTerms::default(),
        }
    }

    pub fn with_market_value(mut self, market_value: f64) -> Self {
        self.market_value = market_value;
        self
    }

    pub fn with_lease(mut self, lease: LeaseTerms) -> Self {
        self.lease = lease;
        self
    }

    /// Amount financed
    pub fn loan_principal(&self) -> f64 {
        self.purchase_price - self.down_payment
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        if !(self.purchase_price > 0.0) || !self.purchase_price.is_finite() {
            return Err(EvaluationError::invalid(
                Field::PurchasePrice,
                "must be greater than zero",
            ));
        }
        if !(self.market_value >= 0.0) || !self.market_value.is_finite() {
            return Err(EvaluationError::invalid(
                Field::MarketValue,
                "must be a non-negative number",
            ));
        }
        if !(0.0..=self.purchase_price).contains(&self.down_payment) {
            return Err(EvaluationError::invalid(
                Field::DownPayment,
                "must be between zero and the purchase price",
            ));
        }
        if self.term_months == 0 {
            return Err(EvaluationError::invalid(
                Field::TermMonths,
                "must be greater than zero",
            ));
        }
        if !(self.annual_rate_pct >= 0.0) || !self.annual_rate_pct.is_finite() {
            return Err(EvaluationError::invalid(
                Field::AnnualRatePct,
                "must be a non-negative number",
            ));
        }
        self.lease.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years() -> YearRange {
        YearRange::new(2011, 2025)
    }

    #[test]
    fn test_profile_validation() {
        let profile = VehicleProfile::new("Toyota", "Tacoma", 2024, Condition::New, 12_000.0);
        assert!(profile.validate(&years()).is_ok());

        let missing_model = VehicleProfile::new("Toyota", "  ", 2024, Condition::New, 12_000.0);
        assert_eq!(
            missing_model.validate(&years()),
            Err(EvaluationError::IncompleteVehicle { field: Field::Model })
        );

        let old = VehicleProfile::new("Toyota", "Tacoma", 2005, Condition::Used, 12_000.0);
        assert_eq!(old.validate(&years()).unwrap_err().field(), Field::Year);

        let negative = VehicleProfile::new("Toyota", "Tacoma", 2024, Condition::Used, -1.0);
        assert_eq!(negative.validate(&years()).unwrap_err().field(), Field::AnnualDistance);
    }

    #[test]
    fn test_financing_validation() {
        assert!(FinancingInputs::new(45_000.0, 4_500.0, 60, 7.0).validate().is_ok());
        assert!(FinancingInputs::new(45_000.0, 45_000.0, 60, 0.0).validate().is_ok());

        let cases = [
            (FinancingInputs::new(0.0, 0.0, 60, 7.0), Field::PurchasePrice),
            (FinancingInputs::new(-5.0, 0.0, 60, 7.0), Field::PurchasePrice),
            (FinancingInputs::new(f64::NAN, 0.0, 60, 7.0), Field::PurchasePrice),
            (FinancingInputs::new(45_000.0, 50_000.0, 60, 7.0), Field::DownPayment),
            (FinancingInputs::new(45_000.0, -1.0, 60, 7.0), Field::DownPayment),
            (FinancingInputs::new(45_000.0, 0.0, 0, 7.0), Field::TermMonths),
            (FinancingInputs::new(45_000.0, 0.0, 60, -0.5), Field::AnnualRatePct),
            (
                FinancingInputs::new(45_000.0, 0.0, 60, 7.0).with_market_value(-1.0),
                Field::MarketValue,
            ),
        ];
        for (inputs, field) in cases {
            assert_eq!(inputs.validate().unwrap_err().field(), field, "{:?}", inputs);
        }
    }

    #[test]
    fn test_lease_validation() {
        let bad_term = LeaseTerms {
            term_months: 0,
            ..LeaseTerms::default()
        };
        assert_eq!(bad_term.validate().unwrap_err().field(), Field::LeaseTermMonths);

        let bad_residual = LeaseTerms {
            residual_pct: 120.0,
            ..LeaseTerms::default()
        };
        assert_eq!(bad_residual.validate().unwrap_err().field(), Field::ResidualPct);
    }

    #[test]
    fn test_money_factor_from_apr() {
        let lease = LeaseTerms::from_apr(6.0);
        assert!((lease.money_factor - 0.0025).abs() < 1e-12);
        assert_eq!(lease.term_months, 36);
    }

    #[test]
    fn test_condition_serde() {
        assert_eq!(serde_json::to_string(&Condition::Used).unwrap(), "\"used\"");
        let parsed: Condition = serde_json::from_str("\"New\"").unwrap();
        assert_eq!(parsed, Condition::New);
    }

    #[test]
    fn test_financing_json_defaults() {
        let inputs: FinancingInputs = serde_json::from_str(
            r#"{"purchase_price": 30000, "term_months": 48, "annual_rate_pct": 5.5}"#,
        )
        .unwrap();

        assert_eq!(inputs.down_payment, 0.0);
        assert_eq!(inputs.market_value, 0.0);
        assert_eq!(inputs.lease, LeaseTerms::default());
    }
}
