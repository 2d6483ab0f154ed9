//! Member inputs for a projection run

use serde::{Deserialize, Serialize};

use crate::assumptions::{StatutoryRules, ValidationLimits};
use crate::error::{ProjectionError, Result};

/// Discount rate (percent) for the survivor benefit when none is supplied
pub const DEFAULT_DISCOUNT_RATE: f64 = 10.0;

fn default_discount_rate() -> f64 {
    DEFAULT_DISCOUNT_RATE
}

/// Parameter set for one projection. Rates are annual percentages
/// (5.0 = 5%), salaries are basic pay excluding allowances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInputs {
    /// Age today
    pub current_age: u32,

    /// Planned retirement age
    pub retirement_age: u32,

    /// Current basic monthly salary
    pub current_monthly_salary: f64,

    /// Average annual salary over the best three years (statutory tier only)
    pub best_three_year_average_annual_salary: f64,

    /// Months already contributed to the statutory tier
    pub months_contributed: u32,

    /// Voluntary Tier 3 contribution rate, 0 to 16.5
    pub tier3_voluntary_rate: f64,

    /// Expected annual return on the Tier 2 fund
    pub tier2_expected_annual_return: f64,

    /// Expected annual return on the Tier 3 fund
    pub tier3_expected_annual_return: f64,

    /// Expected annual salary growth
    pub salary_growth_rate: f64,

    /// Expected annual inflation, used for today's-money figures
    pub inflation_rate: f64,

    /// Discount rate for the survivor benefit present value
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        Self {
            current_age: 30,
            retirement_age: 60,
            current_monthly_salary: 5_000.0,
            best_three_year_average_annual_salary: 60_000.0,
            months_contributed: 60,
            tier3_voluntary_rate: 5.0,
            tier2_expected_annual_return: 10.0,
            tier3_expected_annual_return: 12.0,
            salary_growth_rate: 8.0,
            inflation_rate: 8.0,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

/// Early-retirement status derived from the retirement age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarlyRetirement {
    pub is_early: bool,

    /// Reduction applied to the statutory monthly pension (percent)
    pub penalty_percent: f64,
}

/// Derive early-retirement status under the regulated statutory rules
pub fn derive_early_retirement(inputs: &ProjectionInputs) -> EarlyRetirement {
    inputs.early_retirement(&StatutoryRules::default())
}

impl ProjectionInputs {
    /// Years between now and retirement (0 when retiring today)
    pub fn horizon_years(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    /// Statutory contribution history in years
    pub fn years_contributed(&self) -> f64 {
        self.months_contributed as f64 / 12.0
    }

    /// Early-retirement status. Always derived from the current
    /// `retirement_age`, never stored.
    pub fn early_retirement(&self, rules: &StatutoryRules) -> EarlyRetirement {
        if self.retirement_age < rules.normal_retirement_age {
            let years_early = (rules.normal_retirement_age - self.retirement_age) as f64;
            EarlyRetirement {
                is_early: true,
                penalty_percent: (years_early * rules.penalty_per_year_percent)
                    .min(rules.max_penalty_percent),
            }
        } else {
            EarlyRetirement {
                is_early: false,
                penalty_percent: 0.0,
            }
        }
    }

    /// Reject inputs the engine cannot project meaningfully
    pub fn validate(&self, limits: &ValidationLimits) -> Result<()> {
        check_age("current_age", self.current_age, limits)?;
        check_age("retirement_age", self.retirement_age, limits)?;
        if self.retirement_age < self.current_age {
            return Err(ProjectionError::invalid(
                "retirement_age",
                format!(
                    "retirement_age ({}) must be >= current_age ({})",
                    self.retirement_age, self.current_age
                ),
            ));
        }

        check_positive("current_monthly_salary", self.current_monthly_salary)?;
        check_positive(
            "best_three_year_average_annual_salary",
            self.best_three_year_average_annual_salary,
        )?;

        check_range(
            "tier3_voluntary_rate",
            self.tier3_voluntary_rate,
            0.0,
            limits.max_voluntary_rate,
        )?;

        let rates = [
            ("tier2_expected_annual_return", self.tier2_expected_annual_return),
            ("tier3_expected_annual_return", self.tier3_expected_annual_return),
            ("salary_growth_rate", self.salary_growth_rate),
            ("inflation_rate", self.inflation_rate),
            ("discount_rate", self.discount_rate),
        ];
        for (field, value) in rates {
            check_range(field, value, limits.min_annual_rate, limits.max_annual_rate)?;
        }

        Ok(())
    }
}

fn check_age(field: &str, age: u32, limits: &ValidationLimits) -> Result<()> {
    if age < limits.min_age || age > limits.max_age {
        return Err(ProjectionError::invalid(
            field,
            format!("{} is outside {}..={}", age, limits.min_age, limits.max_age),
        ));
    }
    Ok(())
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ProjectionError::invalid(
            field,
            format!("must be a positive amount, got {}", value),
        ));
    }
    Ok(())
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(ProjectionError::invalid(
            field,
            format!("{} is outside {}..={}", value, min, max),
        ));
    }
    Ok(())
}
