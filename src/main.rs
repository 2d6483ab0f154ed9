//! Pension Projection CLI
//!
//! Command-line interface for projecting retirement income across the three tiers

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;

use pension_projection::inputs::read_inputs_json;
use pension_projection::report::{to_json_pretty, write_series_csv};
use pension_projection::{ProjectionInputs, ProjectionResult, ScenarioRunner};

/// Retirement income projection for a three-tier pension scheme
#[derive(Parser)]
#[command(name = "pension-projection", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project retirement income for one member
    Project(ProjectArgs),
    /// Compare outcomes across voluntary Tier 3 contribution rates
    Sweep(SweepArgs),
}

/// Input source shared by every subcommand: a JSON file, then flag overrides
#[derive(Args)]
struct InputArgs {
    /// Path to JSON input file (camelCase fields)
    #[arg(long)]
    input: Option<String>,

    #[arg(long)]
    current_age: Option<u32>,
    #[arg(long)]
    retirement_age: Option<u32>,
    #[arg(long)]
    monthly_salary: Option<f64>,
    #[arg(long)]
    best_three_year_salary: Option<f64>,
    #[arg(long)]
    months_contributed: Option<u32>,
    /// Voluntary Tier 3 rate, percent of salary
    #[arg(long)]
    tier3_rate: Option<f64>,
    #[arg(long)]
    tier2_return: Option<f64>,
    #[arg(long)]
    tier3_return: Option<f64>,
    #[arg(long)]
    salary_growth: Option<f64>,
    #[arg(long)]
    inflation: Option<f64>,
    /// Discount rate for the survivor benefit
    #[arg(long)]
    discount_rate: Option<f64>,
}

#[derive(Args)]
struct ProjectArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Also write the yearly balance series to this CSV file
    #[arg(long)]
    series_csv: Option<String>,
}

#[derive(Args)]
struct SweepArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Voluntary rates to compare, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = vec![0.0, 2.5, 5.0, 7.5, 10.0, 12.5, 16.5])]
    rates: Vec<f64>,
}

impl InputArgs {
    fn resolve(&self) -> Result<ProjectionInputs> {
        let mut inputs = match &self.input {
            Some(path) => read_inputs_json(path)
                .with_context(|| format!("Failed to read inputs from {}", path))?,
            None => ProjectionInputs::default(),
        };

        if let Some(v) = self.current_age {
            inputs.current_age = v;
        }
        if let Some(v) = self.retirement_age {
            inputs.retirement_age = v;
        }
        if let Some(v) = self.monthly_salary {
            inputs.current_monthly_salary = v;
        }
        if let Some(v) = self.best_three_year_salary {
            inputs.best_three_year_average_annual_salary = v;
        }
        if let Some(v) = self.months_contributed {
            inputs.months_contributed = v;
        }
        if let Some(v) = self.tier3_rate {
            inputs.tier3_voluntary_rate = v;
        }
        if let Some(v) = self.tier2_return {
            inputs.tier2_expected_annual_return = v;
        }
        if let Some(v) = self.tier3_return {
            inputs.tier3_expected_annual_return = v;
        }
        if let Some(v) = self.salary_growth {
            inputs.salary_growth_rate = v;
        }
        if let Some(v) = self.inflation {
            inputs.inflation_rate = v;
        }
        if let Some(v) = self.discount_rate {
            inputs.discount_rate = v;
        }

        Ok(inputs)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::new();

    match cli.command {
        Commands::Project(args) => run_project(&runner, args),
        Commands::Sweep(args) => run_sweep(&runner, args),
    }
}

fn run_project(runner: &ScenarioRunner, args: ProjectArgs) -> Result<()> {
    let inputs = args.inputs.resolve()?;
    let result = runner.run(&inputs).context("Projection failed")?;

    if let Some(path) = &args.series_csv {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path))?;
        write_series_csv(file, &result.yearly)
            .with_context(|| format!("Failed to write series to {}", path))?;
    }

    if args.json {
        println!("{}", to_json_pretty(&result)?);
    } else {
        print_summary(&result);
        if let Some(path) = &args.series_csv {
            println!("\nYearly series written to: {}", path);
        }
    }

    Ok(())
}

fn run_sweep(runner: &ScenarioRunner, args: SweepArgs) -> Result<()> {
    let inputs = args.inputs.resolve()?;
    let results = runner
        .sweep_voluntary_rate(&inputs, &args.rates)
        .context("Sweep failed")?;

    println!(
        "Voluntary rate sweep, age {} -> {}",
        inputs.current_age, inputs.retirement_age
    );
    println!(
        "{:>8} {:>16} {:>14} {:>14} {:>10} {:>18}",
        "Rate %", "Tier 3 Fund", "Tier 3 /mo", "Total /mo", "Ratio %", "Readiness"
    );
    println!("{}", "-".repeat(85));
    for r in &results {
        println!(
            "{:>8.1} {:>16.2} {:>14.2} {:>14.2} {:>10.1} {:>18}",
            r.inputs.tier3_voluntary_rate,
            r.tier3.fund_value,
            r.tier3.monthly_annuity,
            r.total_monthly_income,
            r.replacement_ratio,
            r.readiness
        );
    }

    Ok(())
}

fn print_summary(result: &ProjectionResult) {
    let inputs = &result.inputs;

    println!("Pension Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    println!("Member:");
    println!("  Age: {} -> {}", inputs.current_age, inputs.retirement_age);
    println!("  Monthly salary: {:.2}", inputs.current_monthly_salary);
    println!("  Months contributed: {}", inputs.months_contributed);
    println!("  Voluntary rate: {:.1}%", inputs.tier3_voluntary_rate);
    if result.tier1.early_retirement.is_early {
        println!(
            "  Early retirement penalty: {:.0}%",
            result.tier1.early_retirement.penalty_percent
        );
    }
    println!();

    println!("Tier 1 (statutory):");
    println!("  Pension rights: {:.3}%", result.tier1.pension_rights_percent);
    println!("  Monthly pension: {:.2}", result.tier1.monthly);
    println!();

    for (name, tier) in [("Tier 2 (mandatory)", &result.tier2), ("Tier 3 (voluntary)", &result.tier3)] {
        println!("{}:", name);
        println!("  Fund value: {:.2}", tier.fund_value);
        println!("  Lump sum: {:.2}", tier.lump_sum);
        println!("  Monthly annuity: {:.2}", tier.monthly_annuity);
        if let Some(r) = tier.effective_annual_return {
            println!("  Effective return: {:.2}%", r);
        }
        println!();
    }

    println!("Supplementary:");
    println!("  Survivor benefit (PV): {:.2}", result.supplementary.survivor_benefit);
    println!("  Invalidity benefit: {:.2}", result.supplementary.invalidity_benefit);
    println!();

    println!("Retirement income:");
    println!("  Total monthly: {:.2}", result.total_monthly_income);
    println!("  Total annual: {:.2}", result.total_annual_income);
    println!("  Total lump sum: {:.2}", result.total_lump_sum());
    println!("  Final salary: {:.2}", result.final_projected_salary);
    println!("  Replacement ratio: {:.1}% ({})", result.replacement_ratio, result.readiness);
    println!(
        "  In today's money: {:.2}/month",
        result.real_total_monthly_income
    );
    println!();

    println!("Contributions: {:.2}", result.total_contributions);
    println!("Investment gains: {:.2}", result.total_investment_gains);
}
