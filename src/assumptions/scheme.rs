//! Scheme rules: regulated contribution rates, statutory accrual, annuity terms
//! and supplementary benefit factors
//!
//! Every value here is a policy constant of the three-tier scheme. The
//! defaults are the regulated figures; the structs exist so the engine takes
//! them as data instead of scattering literals through the formulas.

use serde::{Deserialize, Serialize};

/// Mandatory Tier 2 contribution rate (percent of basic salary). Fixed by
/// regulation, never taken from member input.
pub const TIER2_CONTRIBUTION_RATE: f64 = 5.0;

/// Maximum voluntary Tier 3 contribution rate (percent of basic salary)
pub const MAX_TIER3_VOLUNTARY_RATE: f64 = 16.5;

/// Normal statutory retirement age
pub const NORMAL_RETIREMENT_AGE: u32 = 60;

/// Accumulation and payout terms for a funded tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTerms {
    /// Base of the one-time leakage multiplier, applied as `decay_base^years`
    pub decay_base: f64,

    /// Share of the terminal fund paid out as a lump sum
    pub lump_sum_fraction: f64,

    /// Months over which the remaining fund is paid as an annuity
    pub annuity_months: u32,
}

impl TierTerms {
    /// Tier 2: 50% lump sum, remainder over 20 years
    pub fn tier2() -> Self {
        Self {
            decay_base: 0.99,
            lump_sum_fraction: 0.5,
            annuity_months: 240,
        }
    }

    /// Tier 3: 75% lump sum, remainder over 15 years
    pub fn tier3() -> Self {
        Self {
            decay_base: 0.995,
            lump_sum_fraction: 0.75,
            annuity_months: 180,
        }
    }

    /// Share of the terminal fund that is annuitised
    pub fn annuity_fraction(&self) -> f64 {
        1.0 - self.lump_sum_fraction
    }

    /// Leakage multiplier after `years` years
    pub fn decay_factor(&self, years: u32) -> f64 {
        self.decay_base.powi(years as i32)
    }
}

/// Statutory (Tier 1) accrual and early-retirement rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatutoryRules {
    /// Minimum contributory years before any pension right accrues
    pub qualifying_years: f64,

    /// Pension rights (percent) earned at exactly `qualifying_years`
    pub base_rights_percent: f64,

    /// Additional rights (percent) per year beyond `qualifying_years`
    pub increment_per_year: f64,

    /// Cap on the number of years that earn the increment
    pub max_bonus_years: f64,

    /// Ceiling on total pension rights (percent)
    pub max_rights_percent: f64,

    /// Age from which no early-retirement penalty applies
    pub normal_retirement_age: u32,

    /// Penalty (percent) per year retired before `normal_retirement_age`
    pub penalty_per_year_percent: f64,

    /// Ceiling on the early-retirement penalty (percent)
    pub max_penalty_percent: f64,
}

impl Default for StatutoryRules {
    fn default() -> Self {
        Self {
            qualifying_years: 15.0,
            base_rights_percent: 37.5,
            increment_per_year: 1.125,
            max_bonus_years: 20.0,
            max_rights_percent: 60.0,
            normal_retirement_age: NORMAL_RETIREMENT_AGE,
            penalty_per_year_percent: 10.0,
            max_penalty_percent: 50.0,
        }
    }
}

/// Factors for the survivor and invalidity estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryRules {
    /// Years of statutory pension counted in the survivor benefit
    pub survivor_years: u32,

    /// Minimum pension as a fraction of the best-three-year salary
    pub minimum_pension_fraction: f64,

    /// Combined Tier 1 + Tier 2 contribution rate used for refunds (fraction)
    pub refund_contribution_rate: f64,

    /// Interest factor applied to refunded contributions
    pub refund_interest_factor: f64,
}

impl Default for SupplementaryRules {
    fn default() -> Self {
        Self {
            survivor_years: 15,
            minimum_pension_fraction: 0.375,
            refund_contribution_rate: 0.185,
            refund_interest_factor: 1.05,
        }
    }
}

/// Complete rule set for the scheme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchemeRules {
    pub statutory: StatutoryRules,
    pub tier2: TierTerms,
    pub tier3: TierTerms,
    pub supplementary: SupplementaryRules,
}

impl Default for SchemeRules {
    fn default() -> Self {
        Self {
            statutory: StatutoryRules::default(),
            tier2: TierTerms::tier2(),
            tier3: TierTerms::tier3(),
            supplementary: SupplementaryRules::default(),
        }
    }
}
