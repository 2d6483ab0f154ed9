//! Projection output structures

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fund::FundOutcome;
use super::statutory::Tier1Benefit;
use crate::benefits::SupplementaryBenefits;
use crate::inputs::ProjectionInputs;

/// Qualitative retirement readiness, from the replacement ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Readiness {
    pub fn label(&self) -> &'static str {
        match self {
            Readiness::Excellent => "Excellent",
            Readiness::Good => "Good",
            Readiness::Fair => "Fair",
            Readiness::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single year of the projection, for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjectionPoint {
    /// Years from today (0 = today)
    pub year: u32,
    pub age: u32,

    /// Annual salary the next contribution is based on
    pub annual_salary: f64,

    /// Fund balances after `year` years, leakage applied to date
    pub tier2_balance: f64,
    pub tier3_balance: f64,
    pub total_balance: f64,

    /// `total_balance` deflated to today's money
    pub real_total_balance: f64,
}

/// Complete projection for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Inputs the projection was run with
    pub inputs: ProjectionInputs,

    pub tier1: Tier1Benefit,
    pub tier2: FundOutcome,
    pub tier3: FundOutcome,
    pub supplementary: SupplementaryBenefits,

    pub total_monthly_income: f64,
    pub total_annual_income: f64,

    /// Total monthly income as a percentage of final monthly salary
    pub replacement_ratio: f64,
    pub readiness: Readiness,

    pub final_projected_salary: f64,
    pub total_contributions: f64,

    /// Fund values less contributions. Negative when leakage outweighs growth
    pub total_investment_gains: f64,

    /// Income and salary deflated to today's money
    pub real_total_monthly_income: f64,
    pub real_final_salary: f64,

    /// One point per age from current to retirement age inclusive
    pub yearly: Vec<YearlyProjectionPoint>,
}

impl ProjectionResult {
    /// Combined lump sums from the funded tiers
    pub fn total_lump_sum(&self) -> f64 {
        self.tier2.lump_sum + self.tier3.lump_sum
    }

    /// Flat summary row
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            scenario_id: String::new(),
            current_age: self.inputs.current_age,
            retirement_age: self.inputs.retirement_age,
            tier3_voluntary_rate: self.inputs.tier3_voluntary_rate,
            is_early_retirement: self.tier1.early_retirement.is_early,
            early_retirement_penalty_percent: self.tier1.early_retirement.penalty_percent,
            pension_rights_percent: self.tier1.pension_rights_percent,
            tier1_monthly: self.tier1.monthly,
            tier2_fund_value: self.tier2.fund_value,
            tier2_lump_sum: self.tier2.lump_sum,
            tier2_monthly_annuity: self.tier2.monthly_annuity,
            tier3_fund_value: self.tier3.fund_value,
            tier3_lump_sum: self.tier3.lump_sum,
            tier3_monthly_annuity: self.tier3.monthly_annuity,
            total_monthly_income: self.total_monthly_income,
            total_annual_income: self.total_annual_income,
            replacement_ratio: self.replacement_ratio,
            readiness: self.readiness.label().to_string(),
            survivor_benefit: self.supplementary.survivor_benefit,
            invalidity_benefit: self.supplementary.invalidity_benefit,
            final_projected_salary: self.final_projected_salary,
            total_contributions: self.total_contributions,
            total_investment_gains: self.total_investment_gains,
            real_total_monthly_income: self.real_total_monthly_income,
        }
    }
}

/// Flat summary of a projection, one row per scenario in batch output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Scenario the row belongs to, empty for one-off projections
    #[serde(default)]
    pub scenario_id: String,
    pub current_age: u32,
    pub retirement_age: u32,
    pub tier3_voluntary_rate: f64,
    pub is_early_retirement: bool,
    pub early_retirement_penalty_percent: f64,
    pub pension_rights_percent: f64,
    pub tier1_monthly: f64,
    pub tier2_fund_value: f64,
    pub tier2_lump_sum: f64,
    pub tier2_monthly_annuity: f64,
    pub tier3_fund_value: f64,
    pub tier3_lump_sum: f64,
    pub tier3_monthly_annuity: f64,
    pub total_monthly_income: f64,
    pub total_annual_income: f64,
    pub replacement_ratio: f64,
    pub readiness: String,
    pub survivor_benefit: f64,
    pub invalidity_benefit: f64,
    pub final_projected_salary: f64,
    pub total_contributions: f64,
    pub total_investment_gains: f64,
    pub real_total_monthly_income: f64,
}

impl ProjectionSummary {
    pub fn with_scenario_id(mut self, scenario_id: impl Into<String>) -> Self {
        self.scenario_id = scenario_id.into();
        self
    }
}
