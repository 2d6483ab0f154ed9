//! Engine configuration: input validation limits and readiness thresholds

use serde::{Deserialize, Serialize};

use super::scheme::MAX_TIER3_VOLUNTARY_RATE;
use crate::projection::Readiness;

/// Bounds applied to member inputs before a projection runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Youngest accepted age (current or retirement)
    pub min_age: u32,

    /// Oldest accepted age (current or retirement)
    pub max_age: u32,

    /// Upper bound on the voluntary Tier 3 rate (percent)
    pub max_voluntary_rate: f64,

    /// Lower bound on any annual economic rate (percent)
    pub min_annual_rate: f64,

    /// Upper bound on any annual economic rate (percent)
    pub max_annual_rate: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 70,
            max_voluntary_rate: MAX_TIER3_VOLUNTARY_RATE,
            min_annual_rate: 0.0,
            max_annual_rate: 20.0,
        }
    }
}

/// Replacement-ratio thresholds (percent) for the readiness label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            excellent: 80.0,
            good: 60.0,
            fair: 40.0,
        }
    }
}

impl ReadinessThresholds {
    /// Classify a replacement ratio. Checked from the top band down, first
    /// match wins.
    pub fn classify(&self, replacement_ratio: f64) -> Readiness {
        if replacement_ratio >= self.excellent {
            Readiness::Excellent
        } else if replacement_ratio >= self.good {
            Readiness::Good
        } else if replacement_ratio >= self.fair {
            Readiness::Fair
        } else {
            Readiness::NeedsImprovement
        }
    }
}

/// Configuration for a projection engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Input bounds enforced at the engine boundary
    pub limits: ValidationLimits,

    /// Bands used to label the replacement ratio
    pub readiness: ReadinessThresholds,
}
