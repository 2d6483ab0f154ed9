//! Statutory (Tier 1) pension: pension-rights accrual and monthly benefit

use log::warn;
use serde::{Deserialize, Serialize};

use crate::assumptions::StatutoryRules;
use crate::inputs::{EarlyRetirement, ProjectionInputs};

/// Statutory pension payable at retirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier1Benefit {
    pub monthly: f64,
    pub annual: f64,

    /// Share of the best-three-year salary paid as pension (percent)
    pub pension_rights_percent: f64,

    /// Early-retirement status the benefit was reduced by
    pub early_retirement: EarlyRetirement,
}

/// Pension rights percentage under the regulated accrual rules
pub fn calculate_pension_rights_percentage(months_contributed: u32) -> f64 {
    pension_rights_percentage(months_contributed, &StatutoryRules::default())
}

/// Pension rights percentage for a contribution history
///
/// Nothing accrues below the qualifying period. From there rights start at
/// the base percentage and grow by a fixed increment per extra year, with
/// both the bonus years and the total capped.
pub fn pension_rights_percentage(months_contributed: u32, rules: &StatutoryRules) -> f64 {
    let years = months_contributed as f64 / 12.0;
    if years < rules.qualifying_years {
        return 0.0;
    }

    let bonus_years = (years - rules.qualifying_years).min(rules.max_bonus_years);
    (rules.base_rights_percent + bonus_years * rules.increment_per_year)
        .min(rules.max_rights_percent)
}

/// Statutory monthly and annual pension, after any early-retirement penalty
pub fn calculate_tier1_pension(
    inputs: &ProjectionInputs,
    early_retirement: EarlyRetirement,
    rules: &StatutoryRules,
) -> Tier1Benefit {
    let pension_rights_percent = pension_rights_percentage(inputs.months_contributed, rules);

    if pension_rights_percent == 0.0 && inputs.months_contributed > 0 {
        warn!(
            "{} contribution months is below the {}-year qualifying period; statutory pension is zero",
            inputs.months_contributed, rules.qualifying_years
        );
    }

    let mut monthly = (inputs.best_three_year_average_annual_salary * pension_rights_percent
        / 100.0
        / 12.0)
        .max(0.0);

    if early_retirement.is_early {
        monthly *= 1.0 - early_retirement.penalty_percent / 100.0;
    }

    Tier1Benefit {
        monthly,
        annual: monthly * 12.0,
        pension_rights_percent,
        early_retirement,
    }
}
