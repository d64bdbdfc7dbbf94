//! Load assumption overrides from CSV tables
//!
//! Two optional files are recognised in an assumptions directory:
//! - `depreciation_rates.csv` with columns `condition,year,rate`
//! - `low_depreciation.csv` with columns `make,model`
//!
//! A missing file leaves the corresponding defaults untouched.

use crate::error::LoaderError;
use crate::projection::PROJECTION_YEARS;
use crate::vehicle::Condition;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEPRECIATION_RATES_FILE: &str = "depreciation_rates.csv";
pub const LOW_DEPRECIATION_FILE: &str = "low_depreciation.csv";

/// Raw tables read from disk, before being merged over the defaults
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub new_rates: Option<[f64; PROJECTION_YEARS]>,
    pub used_rates: Option<[f64; PROJECTION_YEARS]>,
    pub low_depreciation: Option<Vec<(String, String)>>,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    condition: Condition,
    year: usize,
    rate: f64,
}

#[derive(Debug, Deserialize)]
struct VehicleRow {
    make: String,
    model: String,
}

/// Read a rate table; each condition present must list years 1-5 exactly once
pub fn load_depreciation_rates<R: Read>(
    reader: R,
) -> Result<(Option<[f64; PROJECTION_YEARS]>, Option<[f64; PROJECTION_YEARS]>), LoaderError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut new_rates: [Option<f64>; PROJECTION_YEARS] = [None; PROJECTION_YEARS];
    let mut used_rates: [Option<f64>; PROJECTION_YEARS] = [None; PROJECTION_YEARS];

    for row in rdr.deserialize() {
        let row: RateRow = row?;
        if row.year == 0 || row.year > PROJECTION_YEARS {
            return Err(LoaderError::Table(format!(
                "year {} outside 1-{}",
                row.year, PROJECTION_YEARS
            )));
        }
        if !row.rate.is_finite() || row.rate < 0.0 {
            return Err(LoaderError::Table(format!(
                "rate {} for {:?} year {} must be a non-negative number",
                row.rate, row.condition, row.year
            )));
        }
        let slot = match row.condition {
            Condition::New => &mut new_rates[row.year - 1],
            Condition::Used => &mut used_rates[row.year - 1],
        };
        if slot.replace(row.rate).is_some() {
            return Err(LoaderError::Table(format!(
                "duplicate rate for {:?} year {}",
                row.condition, row.year
            )));
        }
    }

    Ok((complete(new_rates, Condition::New)?, complete(used_rates, Condition::Used)?))
}

fn complete(
    slots: [Option<f64>; PROJECTION_YEARS],
    condition: Condition,
) -> Result<Option<[f64; PROJECTION_YEARS]>, LoaderError> {
    if slots.iter().all(Option::is_none) {
        return Ok(None);
    }
    let mut rates = [0.0; PROJECTION_YEARS];
    for (idx, slot) in slots.iter().enumerate() {
        rates[idx] = slot.ok_or_else(|| {
            LoaderError::Table(format!("missing rate for {:?} year {}", condition, idx + 1))
        })?;
    }
    Ok(Some(rates))
}

/// Read the curated (make, model) list
pub fn load_low_depreciation<R: Read>(reader: R) -> Result<Vec<(String, String)>, LoaderError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut pairs = Vec::new();
    for row in rdr.deserialize() {
        let row: VehicleRow = row?;
        if row.make.is_empty() || row.model.is_empty() {
            return Err(LoaderError::Table("make and model must be non-empty".to_string()));
        }
        pairs.push((row.make, row.model));
    }
    Ok(pairs)
}

fn open(path: &Path) -> Result<Option<File>, LoaderError> {
    if !path.exists() {
        debug!("{} not found, keeping defaults", path.display());
        return Ok(None);
    }
    File::open(path).map(Some).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load every recognised table from a directory
pub fn load_from_dir(dir: &Path) -> Result<LoadedAssumptions, LoaderError> {
    let mut loaded = LoadedAssumptions::default();

    if let Some(file) = open(&dir.join(DEPRECIATION_RATES_FILE))? {
        let (new_rates, used_rates) = load_depreciation_rates(file)?;
        loaded.new_rates = new_rates;
        loaded.used_rates = used_rates;
        info!("Loaded depreciation rates from {}", dir.display());
    }

    if let Some(file) = open(&dir.join(LOW_DEPRECIATION_FILE))? {
        let pairs = load_low_depreciation(file)?;
        info!("Loaded {} low-depreciation vehicles from {}", pairs.len(), dir.display());
        loaded.low_depreciation = Some(pairs);
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES: &str = "condition,year,rate
new,1,0.20
new,2,0.15
new,3,0.12
new,4,0.10
new,5,0.08
";

    #[test]
    fn test_load_partial_rate_table() {
        let (new_rates, used_rates) = load_depreciation_rates(RATES.as_bytes()).expect("load");

        assert_eq!(new_rates, Some([0.20, 0.15, 0.12, 0.10, 0.08]));
        assert_eq!(used_rates, None);
    }

    #[test]
    fn test_incomplete_schedule_rejected() {
        let csv = "condition,year,rate\nused,1,0.10\nused,2,0.12\n";
        let err = load_depreciation_rates(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoaderError::Table(_)));
    }

    #[test]
    fn test_duplicate_and_out_of_range_years_rejected() {
        let dup = "condition,year,rate\nnew,1,0.10\nnew,1,0.12\n";
        assert!(matches!(
            load_depreciation_rates(dup.as_bytes()),
            Err(LoaderError::Table(_))
        ));

        let range = "condition,year,rate\nnew,6,0.10\n";
        assert!(matches!(
            load_depreciation_rates(range.as_bytes()),
            Err(LoaderError::Table(_))
        ));
    }

    #[test]
    fn test_unknown_condition_is_csv_error() {
        let csv = "condition,year,rate\ncertified,1,0.10\n";
        assert!(matches!(
            load_depreciation_rates(csv.as_bytes()),
            Err(LoaderError::Csv(_))
        ));
    }

    #[test]
    fn test_load_low_depreciation() {
        let csv = "make,model\nToyota, Tacoma\nMazda,MX-5 Miata\n";
        let pairs = load_low_depreciation(csv.as_bytes()).expect("load");

        assert_eq!(
            pairs,
            vec![
                ("Toyota".to_string(), "Tacoma".to_string()),
                ("Mazda".to_string(), "MX-5 Miata".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_dir_keeps_defaults() {
        let loaded = load_from_dir(Path::new("/nonexistent/deprecia-assumptions")).expect("load");
        assert!(loaded.new_rates.is_none());
        assert!(loaded.low_depreciation.is_none());
    }
}
