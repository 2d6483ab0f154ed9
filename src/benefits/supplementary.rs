//! Survivor and invalidity benefit estimates
//!
//! These sit outside the retirement income stream. Both derive from the
//! statutory benefit and contribution history rather than the funded tiers.

use serde::{Deserialize, Serialize};

use super::discount::present_value;
use crate::assumptions::SupplementaryRules;
use crate::inputs::ProjectionInputs;

/// Ancillary benefit estimates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplementaryBenefits {
    /// Present value of the survivor lump sum
    pub survivor_benefit: f64,

    /// Statutory minimum monthly pension
    pub minimum_pension: f64,

    /// Refund of statutory contributions with interest
    pub contribution_refund: f64,

    /// Greater of the minimum pension and the contribution refund
    pub invalidity_benefit: f64,
}

/// Present value of the survivor benefit: a fixed number of years of
/// statutory pension, discounted as a single amount over the same period
pub fn survivor_benefit(tier1_monthly: f64, discount_rate: f64, rules: &SupplementaryRules) -> f64 {
    let years = rules.survivor_years;
    present_value(tier1_monthly * 12.0 * years as f64, discount_rate, years).max(0.0)
}

/// Invalidity estimate and its two components
pub fn invalidity_benefit(inputs: &ProjectionInputs, rules: &SupplementaryRules) -> (f64, f64, f64) {
    let minimum_pension =
        inputs.best_three_year_average_annual_salary * rules.minimum_pension_fraction / 12.0;

    let contribution_refund = inputs.current_monthly_salary
        * 12.0
        * rules.refund_contribution_rate
        * inputs.years_contributed()
        * rules.refund_interest_factor;

    (
        minimum_pension.max(contribution_refund).max(0.0),
        minimum_pension,
        contribution_refund,
    )
}

/// All supplementary benefits for a member
pub fn calculate_supplementary(
    inputs: &ProjectionInputs,
    tier1_monthly: f64,
    rules: &SupplementaryRules,
) -> SupplementaryBenefits {
    let (invalidity_benefit, minimum_pension, contribution_refund) = invalidity_benefit(inputs, rules);

    SupplementaryBenefits {
        survivor_benefit: survivor_benefit(tier1_monthly, inputs.discount_rate, rules),
        minimum_pension,
        contribution_refund,
        invalidity_benefit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_survivor_benefit() {
        let rules = SupplementaryRules::default();

        // 3,000/month for 15 years discounted 15 years at 10%
        let expected = 3_000.0 * 12.0 * 15.0 / 1.1_f64.powi(15);
        assert_relative_eq!(survivor_benefit(3_000.0, 10.0, &rules), expected, max_relative = 1e-12);

        assert_eq!(survivor_benefit(0.0, 10.0, &rules), 0.0);
    }

    #[test]
    fn test_invalidity_takes_contribution_refund_when_larger() {
        let inputs = ProjectionInputs {
            months_contributed: 12,
            current_monthly_salary: 5_000.0,
            best_three_year_average_annual_salary: 60_000.0,
            ..ProjectionInputs::default()
        };
        let benefits = calculate_supplementary(&inputs, 0.0, &SupplementaryRules::default());

        // Minimum: 60,000 * 0.375 / 12 = 1,875
        // Refund: 60,000 * 0.185 * 1 * 1.05 = 11,655
        assert_relative_eq!(benefits.minimum_pension, 1_875.0);
        assert_relative_eq!(benefits.contribution_refund, 11_655.0, max_relative = 1e-12);
        assert_relative_eq!(benefits.invalidity_benefit, 11_655.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalidity_with_no_history() {
        let inputs = ProjectionInputs {
            months_contributed: 0,
            ..ProjectionInputs::default()
        };
        let benefits = calculate_supplementary(&inputs, 0.0, &SupplementaryRules::default());

        assert_eq!(benefits.contribution_refund, 0.0);
        assert_relative_eq!(benefits.invalidity_benefit, benefits.minimum_pension);
    }
}
