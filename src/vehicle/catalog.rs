//! Catalog seam for make/model selection and the selectable model-year range

use chrono::Datelike;
use std::collections::{BTreeSet, HashMap};

/// Source of selectable makes and models
///
/// Used only to populate input selection; the numeric core never consumes it.
pub trait Catalog {
    fn list_makes(&self) -> Vec<String>;
    fn list_models(&self, make: &str) -> Vec<String>;
}

/// Title-case a name; any non-letter (digit, '-', space) starts a new word
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut out = String::with_capacity(word.len());
            let mut at_start = true;
            for ch in word.chars() {
                if ch.is_alphabetic() {
                    if at_start {
                        out.extend(ch.to_uppercase());
                    } else {
                        out.extend(ch.to_lowercase());
                    }
                    at_start = false;
                } else {
                    out.push(ch);
                    at_start = true;
                }
            }
            out
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-cased, sorted and de-duplicated names
pub fn normalize_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| title_case(n.as_ref()))
        .filter(|n| !n.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Offline catalog used when no online provider is reachable
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    models: HashMap<String, Vec<String>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback makes with a handful of common models each
    pub fn fallback() -> Self {
        let mut catalog = Self::new();
        catalog.insert("Toyota", ["Tacoma", "4Runner", "Corolla Cross", "Rav4 Prime", "Camry"]);
        catalog.insert("Honda", ["Civic", "Cr-V", "Accord"]);
        catalog.insert("Ford", ["F-150", "Escape", "Mustang"]);
        catalog.insert("Chevrolet", ["Silverado", "Equinox", "Malibu"]);
        catalog.insert("Bmw", ["3 Series", "X3", "X5"]);
        catalog.insert("Tesla", ["Model 3", "Model Y"]);
        catalog
    }

    pub fn insert<I, S>(&mut self, make: &str, models: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.models.entry(title_case(make)).or_default();
        entry.extend(models.into_iter().map(|m| m.as_ref().to_string()));
        *entry = normalize_names(entry.iter());
    }
}

impl Catalog for StaticCatalog {
    fn list_makes(&self) -> Vec<String> {
        normalize_names(self.models.keys())
    }

    fn list_models(&self, make: &str) -> Vec<String> {
        if make.trim().is_empty() {
            return Vec::new();
        }
        self.models.get(&title_case(make)).cloned().unwrap_or_default()
    }
}

/// Inclusive range of supported model years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub earliest: i32,
    pub latest: i32,
}

impl YearRange {
    /// Years offered for selection before the current one
    pub const DEFAULT_SPAN: i32 = 14;

    pub fn new(earliest: i32, latest: i32) -> Self {
        Self { earliest, latest }
    }

    /// Range ending at the given current year
    pub fn ending_at(current_year: i32) -> Self {
        Self::new(current_year - Self::DEFAULT_SPAN, current_year)
    }

    /// Range ending at the system clock's current year
    pub fn current() -> Self {
        Self::ending_at(chrono::Local::now().year())
    }

    /// Four-digit year within the range
    pub fn contains(&self, year: i32) -> bool {
        (1000..=9999).contains(&year) && (self.earliest..=self.latest).contains(&year)
    }

    /// Selectable years, newest first
    pub fn year_options(&self) -> Vec<i32> {
        (self.earliest..=self.latest).rev().collect()
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("TOYOTA"), "Toyota");
        assert_eq!(title_case("cr-v"), "Cr-V");
        assert_eq!(title_case("corolla   cross"), "Corolla Cross");
        assert_eq!(title_case("4runner"), "4Runner");
        assert_eq!(title_case("rav4 prime"), "Rav4 Prime");
        assert_eq!(title_case("f-150"), "F-150");
    }

    #[test]
    fn test_normalize_names_dedups_and_sorts() {
        let names = normalize_names(["honda", "TOYOTA", "Honda", "", "ford"]);
        assert_eq!(names, vec!["Ford", "Honda", "Toyota"]);
    }

    #[test]
    fn test_fallback_catalog() {
        let catalog = StaticCatalog::fallback();

        assert_eq!(
            catalog.list_makes(),
            vec!["Bmw", "Chevrolet", "Ford", "Honda", "Tesla", "Toyota"]
        );
        assert_eq!(catalog.list_models("TESLA"), vec!["Model 3", "Model Y"]);
        assert_eq!(
            catalog.list_models("toyota"),
            vec!["4Runner", "Camry", "Corolla Cross", "Rav4 Prime", "Tacoma"]
        );
        assert!(catalog.list_models("").is_empty());
        assert!(catalog.list_models("Lada").is_empty());
    }

    #[test]
    fn test_year_range() {
        let range = YearRange::ending_at(2025);

        assert_eq!(range.earliest, 2011);
        assert!(range.contains(2011));
        assert!(range.contains(2025));
        assert!(!range.contains(2026));
        assert!(!range.contains(2010));

        let options = range.year_options();
        assert_eq!(options.len(), 15);
        assert_eq!(options.first(), Some(&2025));
        assert_eq!(options.last(), Some(&2011));
    }

    #[test]
    fn test_year_must_have_four_digits() {
        let range = YearRange::new(0, 3000);
        assert!(!range.contains(999));
        assert!(range.contains(1999));
    }
}
