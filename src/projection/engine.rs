//! Projection engine: validates inputs, runs every tier and assembles the result

use log::{debug, warn};

use super::cashflows::{ProjectionResult, YearlyProjectionPoint};
use super::fund::{accumulate, FundProjection};
use super::statutory::calculate_tier1_pension;
use crate::assumptions::{ProjectionConfig, SchemeRules, TIER2_CONTRIBUTION_RATE};
use crate::benefits::{calculate_supplementary, growth_factor, real_value};
use crate::error::Result;
use crate::inputs::ProjectionInputs;

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    rules: SchemeRules,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given scheme rules and config
    pub fn new(rules: SchemeRules, config: ProjectionConfig) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &SchemeRules {
        &self.rules
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run a projection for one set of inputs
    ///
    /// Inputs are validated first; an invalid set produces an error and no
    /// partial result. Identical inputs always give identical results.
    pub fn project(&self, inputs: &ProjectionInputs) -> Result<ProjectionResult> {
        inputs.validate(&self.config.limits)?;

        let years = inputs.horizon_years();
        let early_retirement = inputs.early_retirement(&self.rules.statutory);
        debug!(
            "Projecting age {} -> {} ({} years)",
            inputs.current_age, inputs.retirement_age, years
        );

        if early_retirement.is_early {
            warn!(
                "Retiring at {} is early; statutory pension reduced by {}%",
                inputs.retirement_age, early_retirement.penalty_percent
            );
        }

        let tier1 = calculate_tier1_pension(inputs, early_retirement, &self.rules.statutory);

        let tier2 = accumulate(
            inputs,
            TIER2_CONTRIBUTION_RATE,
            inputs.tier2_expected_annual_return,
            self.rules.tier2,
        );

        // No voluntary participation means no Tier 3 fund at all
        let tier3 = if inputs.tier3_voluntary_rate == 0.0 {
            FundProjection::empty(years, self.rules.tier3)
        } else {
            accumulate(
                inputs,
                inputs.tier3_voluntary_rate,
                inputs.tier3_expected_annual_return,
                self.rules.tier3,
            )
        };

        let supplementary = calculate_supplementary(inputs, tier1.monthly, &self.rules.supplementary);

        let total_monthly_income =
            tier1.monthly + tier2.outcome.monthly_annuity + tier3.outcome.monthly_annuity;
        let final_projected_salary =
            inputs.current_monthly_salary * 12.0 * growth_factor(inputs.salary_growth_rate, years);
        let replacement_ratio = total_monthly_income / (final_projected_salary / 12.0) * 100.0;

        let total_contributions =
            tier2.outcome.total_contributions + tier3.outcome.total_contributions;
        let total_investment_gains =
            tier2.outcome.fund_value + tier3.outcome.fund_value - total_contributions;

        let yearly = self.build_yearly_series(inputs, &tier2, &tier3);

        let result = ProjectionResult {
            inputs: inputs.clone(),
            tier1,
            tier2: tier2.outcome,
            tier3: tier3.outcome,
            supplementary,
            total_monthly_income,
            total_annual_income: total_monthly_income * 12.0,
            replacement_ratio,
            readiness: self.config.readiness.classify(replacement_ratio),
            final_projected_salary,
            total_contributions,
            total_investment_gains,
            real_total_monthly_income: real_value(total_monthly_income, inputs.inflation_rate, years),
            real_final_salary: real_value(final_projected_salary, inputs.inflation_rate, years),
            yearly,
        };

        debug!(
            "Projection complete: {:.2}/month, replacement ratio {:.1}% ({})",
            result.total_monthly_income, result.replacement_ratio, result.readiness
        );

        Ok(result)
    }

    /// One point per age from today to retirement, both ends included
    fn build_yearly_series(
        &self,
        inputs: &ProjectionInputs,
        tier2: &FundProjection,
        tier3: &FundProjection,
    ) -> Vec<YearlyProjectionPoint> {
        (0..=inputs.horizon_years())
            .map(|year| {
                let tier2_balance = tier2.balance_after_decay(year);
                let tier3_balance = tier3.balance_after_decay(year);
                let total_balance = tier2_balance + tier3_balance;

                YearlyProjectionPoint {
                    year,
                    age: inputs.current_age + year,
                    annual_salary: inputs.current_monthly_salary
                        * 12.0
                        * growth_factor(inputs.salary_growth_rate, year),
                    tier2_balance,
                    tier3_balance,
                    total_balance,
                    real_total_balance: real_value(total_balance, inputs.inflation_rate, year),
                }
            })
            .collect()
    }
}
