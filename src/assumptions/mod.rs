//! Scheme assumptions: regulated constants and engine configuration

mod scheme;
mod config;

pub use scheme::{
    SchemeRules, StatutoryRules, SupplementaryRules, TierTerms,
    MAX_TIER3_VOLUNTARY_RATE, NORMAL_RETIREMENT_AGE, TIER2_CONTRIBUTION_RATE,
};
pub use config::{ProjectionConfig, ReadinessThresholds, ValidationLimits};
