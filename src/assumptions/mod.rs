//! Policy assumptions driving the projection and analytics
//!
//! All figures are illustrative constants rather than calibrated actuarial
//! curves. They can be overridden from CSV tables via [`Assumptions::from_dir`].

pub mod depreciation;
pub mod loader;
pub mod low_depreciation;
pub mod ownership;

pub use depreciation::{DepreciationAssumptions, RateSchedule};
pub use loader::{load_from_dir, LoadedAssumptions};
pub use low_depreciation::LowDepreciationList;
pub use ownership::{GapAssumptions, OwnershipCosts};

use crate::error::LoaderError;
use std::path::Path;

/// Buy score thresholds on remaining value after the projection horizon
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringThresholds {
    /// Remaining value % strictly above this scores Smart
    pub smart_above_pct: f64,

    /// Remaining value % strictly above this (and not Smart) scores Caution
    pub caution_above_pct: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            smart_above_pct: 55.0,
            caution_above_pct: 40.0,
        }
    }
}

/// Complete set of assumptions for an evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub depreciation: DepreciationAssumptions,
    pub ownership: OwnershipCosts,
    pub gap: GapAssumptions,
    pub scoring: ScoringThresholds,
    pub low_depreciation: LowDepreciationList,
}

impl Assumptions {
    /// Built-in policy constants
    pub fn default_policy() -> Self {
        Self {
            depreciation: DepreciationAssumptions::default(),
            ownership: OwnershipCosts::default(),
            gap: GapAssumptions::default(),
            scoring: ScoringThresholds::default(),
            low_depreciation: LowDepreciationList::curated(),
        }
    }

    /// Merge loaded tables over the built-in defaults
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Self {
        let mut assumptions = Self::default_policy();
        if let Some(rates) = loaded.new_rates {
            assumptions.depreciation.new_rates = rates;
        }
        if let Some(rates) = loaded.used_rates {
            assumptions.depreciation.used_rates = rates;
        }
        if let Some(pairs) = &loaded.low_depreciation {
            assumptions.low_depreciation =
                LowDepreciationList::from_pairs(pairs.iter().map(|(m, n)| (m.as_str(), n.as_str())));
        }
        assumptions
    }

    /// Load overrides from an assumptions directory
    pub fn from_dir(dir: &Path) -> Result<Self, LoaderError> {
        let loaded = load_from_dir(dir)?;
        Ok(Self::from_loaded(&loaded))
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_loaded_overrides_only_present_tables() {
        let loaded = LoadedAssumptions {
            new_rates: None,
            used_rates: Some([0.05, 0.05, 0.05, 0.05, 0.05]),
            low_depreciation: Some(vec![("Mazda".to_string(), "MX-5 Miata".to_string())]),
        };
        let assumptions = Assumptions::from_loaded(&loaded);

        assert_eq!(assumptions.depreciation.new_rates, DepreciationAssumptions::default().new_rates);
        assert_eq!(assumptions.depreciation.used_rates, [0.05; 5]);
        assert!(assumptions.low_depreciation.contains("Mazda", "MX-5 Miata"));
        assert!(!assumptions.low_depreciation.contains("Toyota", "Tacoma"));
    }

    #[test]
    fn test_default_policy_matches_default() {
        assert_eq!(Assumptions::default(), Assumptions::default_policy());
    }
}
