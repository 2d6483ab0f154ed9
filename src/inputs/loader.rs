//! Load projection scenarios from CSV and JSON files
//!
//! CSV layout: one scenario per row, headers in camelCase matching the JSON
//! field names, plus an optional leading `scenarioId` column.

use csv::Reader;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::data::{ProjectionInputs, DEFAULT_DISCOUNT_RATE};
use crate::error::Result;

/// A named set of inputs, as read from a scenario file
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub scenario_id: String,
    pub inputs: ProjectionInputs,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    scenario_id: Option<String>,
    current_age: u32,
    retirement_age: u32,
    current_monthly_salary: f64,
    best_three_year_average_annual_salary: f64,
    months_contributed: u32,
    tier3_voluntary_rate: f64,
    tier2_expected_annual_return: f64,
    tier3_expected_annual_return: f64,
    salary_growth_rate: f64,
    inflation_rate: f64,
    #[serde(default)]
    discount_rate: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self, row_number: usize) -> Scenario {
        let scenario_id = self
            .scenario_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| row_number.to_string());

        Scenario {
            scenario_id,
            inputs: ProjectionInputs {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
                current_monthly_salary: self.current_monthly_salary,
                best_three_year_average_annual_salary: self.best_three_year_average_annual_salary,
                months_contributed: self.months_contributed,
                tier3_voluntary_rate: self.tier3_voluntary_rate,
                tier2_expected_annual_return: self.tier2_expected_annual_return,
                tier3_expected_annual_return: self.tier3_expected_annual_return,
                salary_growth_rate: self.salary_growth_rate,
                inflation_rate: self.inflation_rate,
                discount_rate: self.discount_rate.unwrap_or(DEFAULT_DISCOUNT_RATE),
            },
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let file = File::open(path.as_ref())?;
    debug!("Loading scenarios from {}", path.as_ref().display());
    load_inputs_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(idx + 1));
    }

    Ok(scenarios)
}

/// Read a single set of inputs from a JSON file
pub fn read_inputs_json<P: AsRef<Path>>(path: P) -> Result<ProjectionInputs> {
    let file = File::open(path.as_ref())?;
    let inputs = serde_json::from_reader(file)?;
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    const SCENARIOS: &str = "\
scenarioId,currentAge,retirementAge,currentMonthlySalary,bestThreeYearAverageAnnualSalary,monthsContributed,tier3VoluntaryRate,tier2ExpectedAnnualReturn,tier3ExpectedAnnualReturn,salaryGrowthRate,inflationRate,discountRate
baseline,30,60,5000,60000,60,5,10,12,8,8,10
early,30,55,5000,60000,60,5,10,12,8,8,
,40,60,8000,90000,420,0,9,11,6,7,12
";

    #[test]
    fn test_load_scenarios() {
        let scenarios = load_inputs_from_reader(SCENARIOS.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].scenario_id, "baseline");
        assert_eq!(scenarios[0].inputs, ProjectionInputs::default());

        // Blank discount rate falls back to the default
        assert_eq!(scenarios[1].scenario_id, "early");
        assert_eq!(scenarios[1].inputs.retirement_age, 55);
        assert_eq!(scenarios[1].inputs.discount_rate, DEFAULT_DISCOUNT_RATE);

        // Blank id falls back to the row number
        assert_eq!(scenarios[2].scenario_id, "3");
        assert_eq!(scenarios[2].inputs.months_contributed, 420);
        assert_eq!(scenarios[2].inputs.tier3_voluntary_rate, 0.0);
    }

    #[test]
    fn test_load_without_optional_columns() {
        let csv = "\
currentAge,retirementAge,currentMonthlySalary,bestThreeYearAverageAnnualSalary,monthsContributed,tier3VoluntaryRate,tier2ExpectedAnnualReturn,tier3ExpectedAnnualReturn,salaryGrowthRate,inflationRate
25,60,3000,30000,12,2.5,10,12,8,8
";
        let scenarios = load_inputs_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].scenario_id, "1");
        assert_eq!(scenarios[0].inputs.discount_rate, DEFAULT_DISCOUNT_RATE);
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let csv = "\
currentAge,retirementAge,currentMonthlySalary,bestThreeYearAverageAnnualSalary,monthsContributed,tier3VoluntaryRate,tier2ExpectedAnnualReturn,tier3ExpectedAnnualReturn,salaryGrowthRate,inflationRate
thirty,60,3000,30000,12,2.5,10,12,8,8
";
        let err = load_inputs_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }

    #[test]
    fn test_missing_json_file() {
        let err = read_inputs_json("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ProjectionError::Io(_)));
    }
}
