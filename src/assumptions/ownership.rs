//! Ownership cost and GAP coverage assumptions
//!
//! Illustrative national averages, not quotes. Figures are in the caller's
//! currency unit; fuel cost is per unit of the caller's distance unit.

/// Recurring costs of keeping the vehicle on the road
#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipCosts {
    /// Annual insurance premium
    pub annual_insurance: f64,

    /// Fuel cost per unit of distance driven
    pub fuel_cost_per_distance: f64,

    /// Annual maintenance spend
    pub annual_maintenance: f64,
}

impl Default for OwnershipCosts {
    fn default() -> Self {
        Self {
            annual_insurance: 2_000.0,
            fuel_cost_per_distance: 0.15,
            annual_maintenance: 800.0,
        }
    }
}

impl OwnershipCosts {
    /// Fuel spend over a number of years at the given annual distance
    pub fn fuel_estimate(&self, annual_distance: f64, years: u32) -> f64 {
        annual_distance * self.fuel_cost_per_distance * years as f64
    }
}

/// GAP insurance recommendation thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct GapAssumptions {
    /// Down payment below this fraction of price triggers the recommendation
    pub min_down_payment_pct: f64,

    /// Typical annual GAP premium
    pub annual_premium: f64,
}

impl Default for GapAssumptions {
    fn default() -> Self {
        Self {
            min_down_payment_pct: 0.20, // 20% down
            annual_premium: 88.0,
        }
    }
}

impl GapAssumptions {
    pub fn is_recommended(&self, purchase_price: f64, down_payment: f64) -> bool {
        down_payment < purchase_price * self.min_down_payment_pct
    }
}
