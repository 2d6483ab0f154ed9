//! Member inputs and scenario loading

mod data;
pub mod loader;

pub use data::{derive_early_retirement, EarlyRetirement, ProjectionInputs, DEFAULT_DISCOUNT_RATE};
pub use loader::{load_inputs, load_inputs_from_reader, read_inputs_json, Scenario};
