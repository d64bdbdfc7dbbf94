//! Error types for evaluation and assumption loading

use std::fmt;
use thiserror::Error;

/// Input field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Make,
    Model,
    Year,
    AnnualDistance,
    PurchasePrice,
    MarketValue,
    DownPayment,
    TermMonths,
    AnnualRatePct,
    ResidualPct,
    LeaseTermMonths,
    MoneyFactor,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Make => "make",
            Field::Model => "model",
            Field::Year => "year",
            Field::AnnualDistance => "annual_distance",
            Field::PurchasePrice => "purchase_price",
            Field::MarketValue => "market_value",
            Field::DownPayment => "down_payment",
            Field::TermMonths => "term_months",
            Field::AnnualRatePct => "annual_rate_pct",
            Field::ResidualPct => "residual_pct",
            Field::LeaseTermMonths => "lease_term_months",
            Field::MoneyFactor => "money_factor",
        };
        f.write_str(name)
    }
}

/// Validation failure for a single evaluation request
///
/// Evaluation refuses to compute anything once one of these is raised; there
/// is no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: Field, reason: String },

    #[error("incomplete vehicle identification: {field} is missing")]
    IncompleteVehicle { field: Field },
}

impl EvaluationError {
    pub(crate) fn invalid(field: Field, reason: impl Into<String>) -> Self {
        EvaluationError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// The offending input field
    pub fn field(&self) -> Field {
        match self {
            EvaluationError::InvalidInput { field, .. } => *field,
            EvaluationError::IncompleteVehicle { field } => *field,
        }
    }
}

/// Failure while loading assumption tables from CSV
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid assumption table: {0}")]
    Table(String),
}
