//! Evaluate one vehicle purchase and print the projection
//!
//! Prints a text summary by default, or the full report as JSON with `--json`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use deprecia::vehicle::{resolve_or_manual, StaticResolver, VehicleIdentity};
use deprecia::{
    Assumptions, Condition, EvaluationReport, FinancingInputs, LeaseTerms, ProjectionConfig,
    ProjectionEngine, VehicleProfile, YearRange,
};
use log::info;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ConditionArg {
    New,
    Used,
}

impl From<ConditionArg> for Condition {
    fn from(value: ConditionArg) -> Self {
        match value {
            ConditionArg::New => Condition::New,
            ConditionArg::Used => Condition::Used,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "evaluate",
    about = "Project vehicle depreciation against a loan balance and compare financing options"
)]
struct Cli {
    /// 17-character VIN; falls back to --make/--model/--year when it can't be resolved
    #[arg(long)]
    vin: Option<String>,
    #[arg(long)]
    make: Option<String>,
    #[arg(long)]
    model: Option<String>,
    /// Model year
    #[arg(long)]
    year: Option<i32>,
    #[arg(long, value_enum, default_value_t = ConditionArg::New)]
    condition: ConditionArg,
    #[arg(long, default_value_t = 12_000.0, help = "Expected distance driven per year")]
    annual_distance: f64,

    #[arg(long, default_value_t = 45_000.0)]
    price: f64,
    #[arg(long, default_value_t = 0.0, help = "Current market value, 0 if unknown")]
    market_value: f64,
    #[arg(long, help = "Down payment; defaults to 10% of price")]
    down: Option<f64>,
    #[arg(long, default_value_t = 60, help = "Loan term in months")]
    term: u32,
    #[arg(long, default_value_t = 7.0, help = "Annual interest rate in percent, e.g. 7")]
    rate: f64,

    #[arg(long, default_value_t = 58.0, help = "Lease residual in percent of price")]
    residual: f64,
    #[arg(long, default_value_t = 36, help = "Lease term in months")]
    lease_term: u32,
    #[arg(long, help = "Lease money factor; defaults to 0.0025")]
    money_factor: Option<f64>,

    /// Directory with depreciation_rates.csv / low_depreciation.csv overrides
    #[arg(long)]
    assumptions_dir: Option<PathBuf>,
    /// Latest selectable model year; defaults to the current year
    #[arg(long)]
    current_year: Option<i32>,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions_dir {
        Some(dir) => Assumptions::from_dir(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_policy(),
    };
    let supported_years = cli.current_year.map_or_else(YearRange::current, YearRange::ending_at);

    let manual = match (&cli.make, &cli.model, cli.year) {
        (Some(make), Some(model), Some(year)) => Some(VehicleIdentity::new(make, model, year)),
        _ => None,
    };
    // No online decoder is wired in; an empty resolver always defers to the manual selection
    let identity = resolve_or_manual(&StaticResolver::new(), cli.vin.as_deref(), manual)
        .context("complete vehicle selection: pass --make, --model and --year")?;

    let profile = VehicleProfile::from_identity(identity, cli.condition.into(), cli.annual_distance);
    let lease = LeaseTerms {
        residual_pct: cli.residual,
        term_months: cli.lease_term,
        money_factor: cli.money_factor.unwrap_or(LeaseTerms::default().money_factor),
    };
    let inputs = FinancingInputs::new(
        cli.price,
        cli.down.unwrap_or(cli.price * 0.10),
        cli.term,
        cli.rate,
    )
    .with_market_value(cli.market_value)
    .with_lease(lease);

    let engine = ProjectionEngine::new(assumptions, ProjectionConfig { supported_years });
    info!("Evaluating {}", profile.display_name());
    let report = engine.evaluate(&profile, &inputs)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &EvaluationReport) {
    let analytics = &report.analytics;

    println!("Vehicle: {}", report.profile.display_name());
    if report.rates.mileage_penalty_applied {
        println!("High usage: mileage penalty added to every year's depreciation rate");
    }
    println!("Drive-off loss: {:.0}", analytics.drive_off_loss);

    println!("\n{:<6} {:>12} {:>12} {:>12} {:>12}", "Year", "Value", "Loss", "Balance", "Equity");
    let losses = analytics.yearly_loss_deltas;
    for (idx, year) in report.calendar_years().iter().enumerate() {
        let loss = if idx == 0 { 0.0 } else { losses[idx - 1] };
        let flag = if analytics.upside_down_years.contains(&idx) { "  upside down" } else { "" };
        println!(
            "{:<6} {:>12.0} {:>12.0} {:>12.0} {:>12.0}{}",
            year,
            report.value_trajectory.values()[idx],
            loss,
            report.loan_trajectory.balances()[idx],
            analytics.equity[idx],
            flag
        );
    }

    println!();
    match &report.loan {
        Some(loan) => println!(
            "Monthly payment: {:.0} | Total interest: {:.0}",
            loan.monthly_payment,
            loan.total_interest()
        ),
        None => println!("Paid in full, no loan"),
    }
    println!(
        "Remaining value after 5 years: {:.1}% ({:?})",
        analytics.remaining_value_pct, analytics.buy_score_tier
    );
    if analytics.low_depreciation_vehicle {
        println!("This model is known to hold its value well");
    }
    if let Some(discount) = analytics.purchase_discount {
        println!("Market value minus price: {:+.0}", discount);
    }

    println!("\nLease monthly: {:.0}", analytics.lease.lease_monthly);
    if let Some(diff) = analytics.lease.monthly_difference {
        println!("Buy minus lease per month: {:+.0}", diff);
    }
    if analytics.gap.recommended {
        println!(
            "Low down payment: consider GAP coverage (~{:.0}/year)",
            analytics.gap.annual_premium
        );
    }

    let tco = &analytics.cost_of_ownership;
    println!(
        "\n5-year cost of ownership: {:.0} (depreciation {:.0}, interest {:.0}, insurance {:.0}, fuel {:.0}, maintenance {:.0})",
        tco.total(),
        tco.depreciation,
        tco.interest,
        tco.insurance,
        tco.fuel,
        tco.maintenance
    );
}
