//! Sweep down payment and loan term combinations for one vehicle
//!
//! Writes one CSV row per financing structure so the options that avoid
//! negative equity stand out.

use anyhow::{Context, Result};
use clap::Parser;
use deprecia::projection::{DEFAULT_DOWN_FRACTIONS, DEFAULT_TERMS};
use deprecia::{
    Assumptions, Condition, FinancingInputs, ProjectionConfig, ProjectionEngine, VehicleProfile,
    YearRange,
};
use log::info;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "sweep_financing",
    about = "Compare down payment and loan term combinations for a vehicle purchase"
)]
struct Cli {
    #[arg(long)]
    make: String,
    #[arg(long)]
    model: String,
    #[arg(long)]
    year: i32,
    #[arg(long, help = "Evaluate as a used vehicle (2+ years old)")]
    used: bool,
    #[arg(long, default_value_t = 12_000.0)]
    annual_distance: f64,
    #[arg(long, default_value_t = 45_000.0)]
    price: f64,
    #[arg(long, default_value_t = 7.0, help = "Annual interest rate in percent")]
    rate: f64,
    /// Down payment fractions of price, comma separated (e.g. 0,0.1,0.2)
    #[arg(long, value_delimiter = ',')]
    down_fractions: Vec<f64>,
    /// Loan terms in months, comma separated (e.g. 36,60,84)
    #[arg(long, value_delimiter = ',')]
    terms: Vec<u32>,
    #[arg(long)]
    assumptions_dir: Option<PathBuf>,
    #[arg(long)]
    current_year: Option<i32>,
    #[arg(long, default_value = "financing_sweep.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let assumptions = match &cli.assumptions_dir {
        Some(dir) => Assumptions::from_dir(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_policy(),
    };
    let supported_years = cli.current_year.map_or_else(YearRange::current, YearRange::ending_at);
    let engine = ProjectionEngine::new(assumptions, ProjectionConfig { supported_years });

    let condition = if cli.used { Condition::Used } else { Condition::New };
    let profile = VehicleProfile::new(&cli.make, &cli.model, cli.year, condition, cli.annual_distance);
    let base = FinancingInputs::new(cli.price, 0.0, DEFAULT_TERMS[0], cli.rate);

    let down_fractions = if cli.down_fractions.is_empty() {
        DEFAULT_DOWN_FRACTIONS.to_vec()
    } else {
        cli.down_fractions.clone()
    };
    let terms = if cli.terms.is_empty() {
        DEFAULT_TERMS.to_vec()
    } else {
        cli.terms.clone()
    };

    info!(
        "Sweeping {} down payments x {} terms for {}",
        down_fractions.len(),
        terms.len(),
        profile.display_name()
    );
    let rows = engine.sweep(&profile, &base, &down_fractions, &terms)?;

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let safe = rows.iter().filter(|r| r.upside_down_years == 0).count();
    println!(
        "{} scenarios written to {} ({} never upside down) in {:?}",
        rows.len(),
        cli.output.display(),
        safe,
        start.elapsed()
    );
    Ok(())
}
