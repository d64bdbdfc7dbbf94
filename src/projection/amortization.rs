//! Fixed-rate loan amortization
//!
//! The balance is simulated month by month rather than taken from the closed
//! form so that the zero floor applies inside the year, not just at year-end.

use super::{MONTHS_PER_YEAR, PROJECTION_YEARS, TRAJECTORY_POINTS};
use log::debug;
use serde::{Deserialize, Serialize};

/// Outstanding loan balance at purchase (year 0) and at each year-end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTrajectory {
    balances: [f64; TRAJECTORY_POINTS],
}

impl LoanTrajectory {
    /// Trajectory for a purchase with nothing financed
    pub fn no_loan() -> Self {
        Self {
            balances: [0.0; TRAJECTORY_POINTS],
        }
    }

    pub fn balances(&self) -> &[f64; TRAJECTORY_POINTS] {
        &self.balances
    }

    /// First year-end at which the loan is fully repaid
    pub fn payoff_year(&self) -> Option<usize> {
        self.balances.iter().position(|b| *b == 0.0)
    }
}

/// Amortization result for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub trajectory: LoanTrajectory,
}

impl LoanSchedule {
    /// Sum of every scheduled payment over the full term
    pub fn total_paid(&self) -> f64 {
        self.monthly_payment * self.term_months as f64
    }

    /// Interest paid over the full term; zero for a 0% loan
    pub fn total_interest(&self) -> f64 {
        (self.total_paid() - self.principal).max(0.0)
    }
}

/// Monthly rate from an annual percentage rate
fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Level monthly payment for a fixed-rate loan
///
/// A 0% loan repays the principal in equal instalments. The annuity factor
/// `1 - (1 + r)^-n` is evaluated through `ln_1p`/`exp_m1`, which keeps the
/// payment finite for rates too small to register in `1 + r` and tends to
/// `principal * r` for very long terms.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return principal;
    }
    let r = monthly_rate(annual_rate_pct);
    let n = term_months as f64;
    if r == 0.0 {
        return principal / n;
    }
    let annuity_factor = -(-n * r.ln_1p()).exp_m1();
    if annuity_factor <= 0.0 {
        return principal / n;
    }
    principal * r / annuity_factor
}

/// Amortize a loan and record the balance after each projection year
///
/// Callers only invoke this with a positive principal; a purchase with
/// nothing financed has no schedule at all. The final scheduled payment
/// settles the loan, so the balance is exactly zero from month `term_months`
/// onward.
pub fn amortize(principal: f64, annual_rate_pct: f64, term_months: u32) -> LoanSchedule {
    let r = monthly_rate(annual_rate_pct);
    let payment = monthly_payment(principal, annual_rate_pct, term_months);

    let mut balances = [0.0; TRAJECTORY_POINTS];
    balances[0] = principal;

    let mut balance = principal;
    let mut month = 0u32;
    for year in 1..=PROJECTION_YEARS {
        for _ in 0..MONTHS_PER_YEAR {
            month += 1;
            if balance <= 0.0 {
                balance = 0.0;
                break;
            }
            let interest = balance * r;
            let principal_component = payment - interest;
            balance -= principal_component;
            if balance < 0.0 || month >= term_months {
                balance = 0.0;
            }
        }
        balances[year] = balance;
    }

    debug!(
        "Amortized {:.2} at {}% over {} months: payment {:.2}, balances {:?}",
        principal, annual_rate_pct, term_months, payment, balances
    );

    LoanSchedule {
        principal,
        annual_rate_pct,
        term_months,
        monthly_payment: payment,
        trajectory: LoanTrajectory { balances },
    }
}
