//! Petro Fiscal CLI
//!
//! Runs a single fiscal projection from command-line assumptions (or a
//! saved JSON scenario) and prints the valuation metrics and the per-year
//! schedule, optionally exporting them as CSV or JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use petro_fiscal::assumptions::loader;
use petro_fiscal::{Assumptions, DepreciationRate, ProjectionEngine, ScenarioReport};

#[derive(Parser, Debug)]
#[command(
    name = "petro_fiscal",
    version,
    about = "Single-scenario fiscal projection and valuation for an oil production project"
)]
struct Cli {
    /// Oil price, $/bbl
    #[arg(long, default_value_t = 75.0)]
    oil_price: f64,

    /// Daily production, bbl/day
    #[arg(long, default_value_t = 200_000)]
    daily_production: u64,

    /// Capital expenditure, $M
    #[arg(long, default_value_t = 4_000.0)]
    capex: f64,

    /// Operating cost per barrel, $/bbl
    #[arg(long, default_value_t = 12.0)]
    opex_per_bbl: f64,

    /// Depreciation rate, % per year (10, 20, 25, or 30)
    #[arg(long, default_value_t = 20)]
    depreciation_rate: u32,

    /// Royalty rate, % of gross revenue
    #[arg(long, default_value_t = 10.0)]
    royalty_rate: f64,

    /// Corporate income tax rate, %
    #[arg(long, default_value_t = 30.0)]
    tax_rate: f64,

    /// Discount rate for NPV, %
    #[arg(long, default_value_t = 10.0)]
    discount_rate: f64,

    /// Project life, years
    #[arg(long, default_value_t = 10)]
    project_life: u32,

    /// Load the scenario from a JSON file instead of the flags above
    #[arg(long, conflicts_with_all = [
        "oil_price", "daily_production", "capex", "opex_per_bbl",
        "depreciation_rate", "royalty_rate", "tax_rate", "discount_rate",
        "project_life",
    ])]
    scenario: Option<PathBuf>,

    /// Print the full report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the schedule to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Cli {
    fn to_assumptions(&self) -> anyhow::Result<Assumptions> {
        let depreciation_rate = DepreciationRate::from_pct(self.depreciation_rate)
            .with_context(|| {
                format!(
                    "depreciation rate {}% is not one of the allowed schedules (10/20/25/30)",
                    self.depreciation_rate
                )
            })?;

        Ok(Assumptions {
            oil_price: self.oil_price,
            daily_production: self.daily_production,
            capex: self.capex,
            opex_per_bbl: self.opex_per_bbl,
            depreciation_rate,
            royalty_rate_pct: self.royalty_rate,
            tax_rate_pct: self.tax_rate,
            discount_rate_pct: self.discount_rate,
            project_life_years: self.project_life,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.scenario {
        Some(path) => loader::from_json_path(path)
            .with_context(|| format!("loading scenario from {}", path.display()))?,
        None => cli.to_assumptions()?,
    };

    let result = ProjectionEngine::new(assumptions.clone())
        .project()
        .context("projection failed")?;
    let report = ScenarioReport::new(&assumptions, &result);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("Petro Fiscal v0.1.0");
        println!("===================\n");
        print!("{}", report.metrics_text());
        println!("\nProjected Annual Financials ($M):");
        print!("{}", report.schedule_table());
    }

    if let Some(path) = &cli.csv {
        report
            .write_csv(path)
            .with_context(|| format!("writing schedule to {}", path.display()))?;
        println!("\nSchedule written to: {}", path.display());
    }

    Ok(())
}
