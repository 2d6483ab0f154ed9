//! Projection engine: statutory pension, funded tiers and the yearly series

mod state;
mod engine;
mod cashflows;
mod fund;
mod statutory;
mod returns;

pub use state::FundState;
pub use engine::ProjectionEngine;
pub use cashflows::{ProjectionResult, ProjectionSummary, Readiness, YearlyProjectionPoint};
pub use fund::{accumulate, FundOutcome, FundProjection};
pub use statutory::{
    calculate_pension_rights_percentage, calculate_tier1_pension, pension_rights_percentage,
    Tier1Benefit,
};
pub use returns::{accumulated_value, effective_annual_return};
