//! Closed-form ROI calculator.
//!
//! ## Formula
//!
//! ```text
//! hours_saved     = volume * minutes_saved / 60
//! labour_savings  = hours_saved * hourly_wage
//! automation_cost = volume * cost_per_invoice
//! error_savings   = (error_rate_manual / 100 - automated_error_rate) * volume * error_cost
//! monthly         = (labour_savings + error_savings - automation_cost) * boost
//! payback         = impl_cost / monthly              (unbounded if monthly <= 0)
//! cumulative      = monthly * horizon
//! net             = cumulative - impl_cost
//! roi             = net / impl_cost * 100            (unbounded if impl_cost <= 0)
//! ```
//!
//! Inputs are neither clamped nor rejected: a manual error rate below the
//! automated baseline yields negative error savings.

mod params;

pub use params::CalculatorParams;

use crate::types::{Metric, ScenarioInput, ScenarioResult};

/// Unrounded intermediate terms of a calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavingsBreakdown {
    /// Staff hours saved per month.
    pub hours_saved_per_month: f64,
    /// Value of the hours saved.
    pub labour_savings: f64,
    /// Monthly cost of processing the volume automatically.
    pub automation_cost: f64,
    /// Monthly remediation cost avoided. May be negative.
    pub error_savings: f64,
    /// Monthly savings before the boost factor.
    pub unbiased_monthly_savings: f64,
    /// Monthly savings after the boost factor.
    pub monthly_savings: f64,
}

/// ROI calculator over a fixed set of coefficients.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Calculator {
    params: CalculatorParams,
}

impl Calculator {
    /// Creates a calculator with the given coefficients.
    pub fn new(params: CalculatorParams) -> Self {
        Self { params }
    }

    /// The coefficients in use.
    pub fn params(&self) -> &CalculatorParams {
        &self.params
    }

    /// Computes the monthly savings terms without rounding.
    pub fn breakdown(&self, input: &ScenarioInput) -> SavingsBreakdown {
        let p = &self.params;
        let volume = input.monthly_invoice_volume;

        let hours_saved_per_month = volume * p.hours_saved_per_invoice();
        let labour_savings = hours_saved_per_month * input.hourly_wage;
        let automation_cost = volume * p.automated_cost_per_invoice;
        let error_savings =
            (input.error_rate_manual / 100.0 - p.automated_error_rate) * volume * input.error_cost;

        let unbiased_monthly_savings = labour_savings + error_savings - automation_cost;
        let monthly_savings = unbiased_monthly_savings * p.savings_boost_factor;

        SavingsBreakdown {
            hours_saved_per_month,
            labour_savings,
            automation_cost,
            error_savings,
            unbiased_monthly_savings,
            monthly_savings,
        }
    }

    /// Computes the rounded scenario metrics.
    ///
    /// Total and deterministic: every input produces a result.
    pub fn compute(&self, input: &ScenarioInput) -> ScenarioResult {
        let monthly_savings = self.breakdown(input).monthly_savings;
        let impl_cost = input.one_time_implementation_cost;

        let payback_months = if monthly_savings > 0.0 {
            Metric::from_f64(impl_cost / monthly_savings)
        } else {
            Metric::Unbounded
        };

        let cumulative_savings = monthly_savings * input.time_horizon_months as f64;
        let net_savings = cumulative_savings - impl_cost;

        let roi_percentage = if impl_cost > 0.0 {
            Metric::from_f64(net_savings / impl_cost * 100.0)
        } else {
            Metric::Unbounded
        };

        ScenarioResult {
            monthly_savings: round_cents(monthly_savings),
            payback_months: payback_months.map(round_cents),
            cumulative_savings: round_cents(cumulative_savings),
            net_savings: round_cents(net_savings),
            roi_percentage: roi_percentage.map(round_cents),
        }
    }
}

/// Rounds to two decimal places, half away from zero.
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
