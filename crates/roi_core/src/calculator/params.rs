//! Calculator parameter structures.
//!
//! Holds the fixed coefficients of the savings formula. Callers of the API
//! never see or change these; they are injected once when the calculator is
//! built so alternate formula versions can be exercised in tests.

/// Coefficients of the savings formula.
///
/// # Examples
///
/// ```
/// use roi_core::calculator::CalculatorParams;
///
/// let params = CalculatorParams::default();
/// assert_eq!(params.automated_cost_per_invoice, 0.20);
/// assert_eq!(params.minutes_saved_per_invoice, 8.0);
///
/// // A cheaper automation tier
/// let discounted = CalculatorParams {
///     automated_cost_per_invoice: 0.10,
///     ..CalculatorParams::default()
/// };
/// assert_eq!(discounted.savings_boost_factor, 1.1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorParams {
    /// Processing cost per invoice once automated.
    pub automated_cost_per_invoice: f64,
    /// Residual error rate once automated, as a fraction (0.001 = 0.1%).
    pub automated_error_rate: f64,
    /// Multiplier applied to unbiased monthly savings.
    pub savings_boost_factor: f64,
    /// Staff minutes saved per automated invoice.
    pub minutes_saved_per_invoice: f64,
}

impl CalculatorParams {
    /// Staff hours saved per automated invoice.
    #[inline]
    pub fn hours_saved_per_invoice(&self) -> f64 {
        self.minutes_saved_per_invoice / 60.0
    }
}

impl Default for CalculatorParams {
    /// Returns the production coefficients.
    fn default() -> Self {
        Self {
            automated_cost_per_invoice: 0.20,
            automated_error_rate: 0.001,
            savings_boost_factor: 1.1,
            minutes_saved_per_invoice: 8.0,
        }
    }
}
