//! Scenario runner for batch projections and sensitivity sweeps
//!
//! Holds one engine, then runs many input sets through it. Projections are
//! independent pure functions, so batches fan out with rayon.

use log::{info, warn};
use rayon::prelude::*;

use crate::error::{ProjectionError, Result};
use crate::inputs::{ProjectionInputs, Scenario};
use crate::projection::{ProjectionEngine, ProjectionResult, ProjectionSummary};

/// Runs projections for many input sets against the same engine
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // How much does each extra point of voluntary contribution buy?
/// let results = runner.sweep_voluntary_rate(&inputs, &[0.0, 5.0, 10.0, 16.5])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the regulated scheme rules and default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner around a pre-built engine
    pub fn with_engine(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Run a single projection
    pub fn run(&self, inputs: &ProjectionInputs) -> Result<ProjectionResult> {
        self.engine.project(inputs)
    }

    /// Run projections for many input sets in parallel
    ///
    /// Results come back in input order. A failing input yields an `Err` in
    /// its slot and does not stop the rest of the batch.
    pub fn run_batch(&self, inputs: &[ProjectionInputs]) -> Vec<Result<ProjectionResult>> {
        info!("Running batch of {} projections", inputs.len());

        let results: Vec<_> = inputs.par_iter().map(|i| self.engine.project(i)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{} of {} projections failed validation", failed, inputs.len());
        }
        info!("Batch complete: {} succeeded", inputs.len() - failed);

        results
    }

    /// Run named scenarios in parallel, keeping each id with its outcome
    pub fn run_scenarios<'a>(
        &self,
        scenarios: &'a [Scenario],
    ) -> Vec<(&'a str, Result<ProjectionResult>)> {
        info!("Running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|s| (s.scenario_id.as_str(), self.engine.project(&s.inputs)))
            .collect()
    }

    /// Summary rows for the scenarios that project, tagged with their ids
    ///
    /// Failing scenarios are logged and returned separately so no row is
    /// attributed to the wrong scenario.
    pub fn summarize_scenarios(
        &self,
        scenarios: &[Scenario],
    ) -> (Vec<ProjectionSummary>, Vec<(String, ProjectionError)>) {
        let mut summaries = Vec::with_capacity(scenarios.len());
        let mut failures = Vec::new();

        for (scenario_id, outcome) in self.run_scenarios(scenarios) {
            match outcome {
                Ok(result) => summaries.push(result.summary().with_scenario_id(scenario_id)),
                Err(e) => {
                    warn!("Scenario {} skipped: {}", scenario_id, e);
                    failures.push((scenario_id.to_string(), e));
                }
            }
        }

        (summaries, failures)
    }

    /// Re-run one input set at each voluntary contribution rate
    pub fn sweep_voluntary_rate(
        &self,
        inputs: &ProjectionInputs,
        rates: &[f64],
    ) -> Result<Vec<ProjectionResult>> {
        rates
            .iter()
            .map(|&rate| {
                self.engine.project(&ProjectionInputs {
                    tier3_voluntary_rate: rate,
                    ..inputs.clone()
                })
            })
            .collect()
    }

    /// Re-run one input set at each retirement age
    pub fn sweep_retirement_age(
        &self,
        inputs: &ProjectionInputs,
        ages: impl IntoIterator<Item = u32>,
    ) -> Result<Vec<ProjectionResult>> {
        ages.into_iter()
            .map(|age| {
                self.engine.project(&ProjectionInputs {
                    retirement_age: age,
                    ..inputs.clone()
                })
            })
            .collect()
    }
}
