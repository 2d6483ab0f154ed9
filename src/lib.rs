//! Pension Projection - Retirement income projection for a three-tier pension scheme
//!
//! This library provides:
//! - Statutory (Tier 1) pension from contribution history and early-retirement rules
//! - Funded Tier 2 and voluntary Tier 3 accumulation with lump sum / annuity split
//! - Survivor and invalidity benefit estimates
//! - Replacement ratio, readiness rating and a year-by-year balance series
//! - Batch and sweep runs over many input sets

pub mod error;
pub mod assumptions;
pub mod inputs;
pub mod projection;
pub mod benefits;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use assumptions::{ProjectionConfig, SchemeRules};
pub use inputs::ProjectionInputs;
pub use projection::{ProjectionEngine, ProjectionResult, ProjectionSummary, Readiness, YearlyProjectionPoint};
pub use scenario::ScenarioRunner;
