//! Curated list of vehicles known to hold their value

use std::collections::BTreeSet;

/// Set of (make, model) pairs with historically low depreciation
///
/// Matching is exact on both parts after trimming and lower-casing, so
/// "Porsche 911" does not match a "Porsche 911 Turbo" trim or a "Toyota Rav4"
/// when only "RAV4 Prime" is listed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LowDepreciationList {
    entries: BTreeSet<(String, String)>,
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl LowDepreciationList {
    /// Build from (make, model) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(make, model)| (normalize(make.as_ref()), normalize(model.as_ref())))
            .collect();
        Self { entries }
    }

    /// Default curated list
    pub fn curated() -> Self {
        Self::from_pairs([
            ("Toyota", "Tacoma"),
            ("Toyota", "4Runner"),
            ("Toyota", "Corolla Cross"),
            ("Toyota", "RAV4 Prime"),
            ("Honda", "Civic"),
            ("Honda", "CR-V"),
            ("Porsche", "911"),
            ("Jeep", "Wrangler"),
            ("Subaru", "Crosstrek"),
            ("Lexus", "RX"),
        ])
    }

    pub fn contains(&self, make: &str, model: &str) -> bool {
        self.entries.contains(&(normalize(make), normalize(model)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
