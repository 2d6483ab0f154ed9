//! Run projections for every scenario in a CSV file
//!
//! Outputs one summary row per scenario that projects successfully, keyed by
//! scenario id; failures are listed at the end

use anyhow::{Context, Result};
use clap::Parser;
use pension_projection::inputs::load_inputs;
use pension_projection::report::write_summaries_csv;
use pension_projection::ScenarioRunner;
use std::fs::File;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Project every scenario in a CSV file")]
struct Args {
    /// Scenario CSV (camelCase headers, optional scenarioId column)
    #[arg(long)]
    input: String,

    /// Summary CSV to write
    #[arg(long, default_value = "projection_summary.csv")]
    output: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input);
    let scenarios = load_inputs(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let (summaries, failures) = ScenarioRunner::new().summarize_scenarios(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output))?;
    write_summaries_csv(file, &summaries)
        .with_context(|| format!("Failed to write {}", args.output))?;

    println!("\nOutput written to: {}", args.output);
    println!("  Projected: {}", summaries.len());
    println!("  Failed: {}", failures.len());
    for (scenario_id, e) in &failures {
        println!("    {}: {}", scenario_id, e);
    }
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
