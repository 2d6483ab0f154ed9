//! Running state of a fund during the year-by-year accumulation

/// State of one funded tier at a point in the projection
#[derive(Debug, Clone)]
pub struct FundState {
    /// Completed projection years (0 before the first contribution)
    pub year: u32,

    /// Monthly salary that the next contribution is based on
    pub monthly_salary: f64,

    /// Fund balance before the horizon-level decay is applied
    pub balance: f64,

    /// Sum of contributions paid in so far
    pub total_contributions: f64,
}

impl FundState {
    /// Empty fund at the start of the projection
    pub fn new(current_monthly_salary: f64) -> Self {
        Self {
            year: 0,
            monthly_salary: current_monthly_salary,
            balance: 0.0,
            total_contributions: 0.0,
        }
    }

    /// Simulate one year and return the contribution paid
    ///
    /// The contribution lands before growth, so it earns the full year's
    /// return. Salary then grows to become next year's contribution base.
    pub fn advance_year(
        &mut self,
        contribution_rate_percent: f64,
        annual_return_percent: f64,
        salary_growth_percent: f64,
    ) -> f64 {
        let contribution = self.monthly_salary * 12.0 * contribution_rate_percent / 100.0;

        self.balance = (self.balance + contribution) * (1.0 + annual_return_percent / 100.0);
        self.total_contributions += contribution;
        self.monthly_salary *= 1.0 + salary_growth_percent / 100.0;
        self.year += 1;

        contribution
    }

    /// Growth earned so far (balance less contributions)
    pub fn investment_gain(&self) -> f64 {
        self.balance - self.total_contributions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_before_growth() {
        let mut state = FundState::new(1_000.0);

        // 12,000 salary at 10% = 1,200, grown 10% = 1,320
        let contribution = state.advance_year(10.0, 10.0, 0.0);
        assert!((contribution - 1_200.0).abs() < 1e-9);
        assert!((state.balance - 1_320.0).abs() < 1e-9);
        assert!((state.investment_gain() - 120.0).abs() < 1e-9);
        assert_eq!(state.year, 1);
    }

    #[test]
    fn test_salary_grows_after_contribution() {
        let mut state = FundState::new(1_000.0);

        state.advance_year(5.0, 0.0, 10.0);
        assert!((state.monthly_salary - 1_100.0).abs() < 1e-9);

        // Second contribution uses the grown salary: 13,200 * 5%
        let second = state.advance_year(5.0, 0.0, 10.0);
        assert!((second - 660.0).abs() < 1e-9);
        assert!((state.total_contributions - 1_260.0).abs() < 1e-9);
    }
}
