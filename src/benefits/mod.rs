//! Supplementary benefits (survivor, invalidity) and discounting helpers

pub mod discount;
mod supplementary;

pub use discount::{discount_factor, growth_factor, present_value, real_value};
pub use supplementary::{
    calculate_supplementary, invalidity_benefit, survivor_benefit, SupplementaryBenefits,
};
