//! Discounting helpers for present values and today's-money figures
//!
//! Rates are annual percentages, matching the rest of the inputs.

/// Annual discount factor over `years` years: `1 / (1 + rate)^years`
pub fn discount_factor(rate_percent: f64, years: u32) -> f64 {
    1.0 / (1.0 + rate_percent / 100.0).powi(years as i32)
}

/// Present value of a single amount received `years` years from now
pub fn present_value(amount: f64, rate_percent: f64, years: u32) -> f64 {
    amount * discount_factor(rate_percent, years)
}

/// Deflate a future nominal amount into today's money
pub fn real_value(nominal: f64, inflation_percent: f64, years: u32) -> f64 {
    present_value(nominal, inflation_percent, years)
}

/// Compound growth factor over `years` years: `(1 + rate)^years`
pub fn growth_factor(rate_percent: f64, years: u32) -> f64 {
    (1.0 + rate_percent / 100.0).powi(years as i32)
}
