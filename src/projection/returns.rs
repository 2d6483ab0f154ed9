//! Effective annual return on a funded tier
//!
//! The cash flows here always have the same shape: one contribution at the
//! start of each year and a single fund value at the end of the last year.
//! Accumulated value is strictly increasing in the rate, so the root is
//! unique and is bracketed before any iteration starts.

/// Lowest annual rate considered (-99%)
const MIN_RATE: f64 = -0.99;

/// Highest annual rate the bracket may grow to before giving up
const MAX_RATE: f64 = 1_000.0;

const MAX_ITERATIONS: usize = 200;

/// Value at the end of the last year of contributions paid at the start of
/// each year, compounded at `rate` (decimal)
pub fn accumulated_value(contributions: &[f64], rate: f64) -> f64 {
    value_and_slope(contributions, rate).0
}

/// Accumulated value and its derivative with respect to the rate
fn value_and_slope(contributions: &[f64], rate: f64) -> (f64, f64) {
    let growth = 1.0 + rate;
    contributions
        .iter()
        .fold((0.0, 0.0), |(value, slope), &c| {
            ((value + c) * growth, slope * growth + value + c)
        })
}

/// Effective annual return (percent) on a contribution stream
///
/// Solves `accumulated_value(contributions, r) == terminal_value` for `r`.
/// Returns `None` when nothing was contributed, when the fund is empty, or
/// when the root lies outside -99%..=100000%.
pub fn effective_annual_return(contributions: &[f64], terminal_value: f64) -> Option<f64> {
    if contributions.iter().any(|&c| c < 0.0) || contributions.iter().sum::<f64>() <= 0.0 {
        return None;
    }
    if !terminal_value.is_finite() || terminal_value <= 0.0 {
        return None;
    }

    let shortfall = |rate: f64| accumulated_value(contributions, rate) - terminal_value;

    let mut low = MIN_RATE;
    if shortfall(low) > 0.0 {
        return None;
    }

    // Walk the upper bound out until it sits past the root
    let mut high = 0.1;
    while shortfall(high) < 0.0 {
        low = high;
        high = high * 2.0 + 0.1;
        if high > MAX_RATE {
            return None;
        }
    }

    let tolerance = 1e-12 * terminal_value;
    let mut rate = (low + high) / 2.0;

    for _ in 0..MAX_ITERATIONS {
        let (value, slope) = value_and_slope(contributions, rate);
        let diff = value - terminal_value;
        if diff.abs() <= tolerance {
            break;
        }

        if diff < 0.0 {
            low = rate;
        } else {
            high = rate;
        }

        // Newton step when it stays inside the bracket, halve it otherwise
        let newton = rate - diff / slope;
        rate = if slope > 0.0 && newton > low && newton < high {
            newton
        } else {
            (low + high) / 2.0
        };

        if high - low < 1e-15 {
            break;
        }
    }

    Some(rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accumulated_value() {
        // 100 at the start of each of two years at 10%: 100*1.21 + 100*1.1
        assert_relative_eq!(accumulated_value(&[100.0, 100.0], 0.10), 231.0, epsilon = 1e-9);
        assert_eq!(accumulated_value(&[], 0.10), 0.0);
        assert_eq!(accumulated_value(&[100.0, 100.0], 0.0), 200.0);
    }

    #[test]
    fn test_single_contribution() {
        // 1000 in, 1100 out a year later
        let rate = effective_annual_return(&[1_000.0], 1_100.0).unwrap();
        assert_relative_eq!(rate, 10.0, epsilon = 1e-8);
    }

    #[test]
    fn test_level_contributions_recover_growth_rate() {
        let contributions = vec![100.0; 10];
        let terminal: f64 = (1..=10).map(|t| 100.0 * 1.08_f64.powi(t)).sum();

        let rate = effective_annual_return(&contributions, terminal).unwrap();
        assert_relative_eq!(rate, 8.0, epsilon = 1e-8);
    }

    #[test]
    fn test_losses_give_negative_return() {
        // Flat fund that leaked 1% a year for 20 years
        let contributions = vec![600.0; 20];
        let terminal = 12_000.0 * 0.99_f64.powi(20);

        let rate = effective_annual_return(&contributions, terminal).unwrap();
        assert!(rate < 0.0);
        assert_relative_eq!(
            accumulated_value(&contributions, rate / 100.0),
            terminal,
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_high_growth_is_solved_not_capped() {
        // Contributions rising 20% a year against a 5% return. Most of the
        // money goes in late, so 30 years of leakage bites hard: about 0.35%
        let contributions: Vec<f64> = (0..30).map(|t| 1_000.0 * 1.2_f64.powi(t)).collect();
        let terminal = accumulated_value(&contributions, 0.05) * 0.99_f64.powi(30);

        let rate = effective_annual_return(&contributions, terminal).unwrap();
        assert!(rate > 0.0 && rate < 1.0, "got {}", rate);
        assert_relative_eq!(
            accumulated_value(&contributions, rate / 100.0),
            terminal,
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_nothing_to_solve() {
        assert!(effective_annual_return(&[], 100.0).is_none());
        assert!(effective_annual_return(&[0.0, 0.0], 100.0).is_none());
        assert!(effective_annual_return(&[100.0], 0.0).is_none());
    }
}
