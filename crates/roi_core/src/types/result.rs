//! Derived scenario metrics.

use serde::{Deserialize, Serialize};

use super::metric::Metric;

/// Metrics derived from a `ScenarioInput`, rounded to cents.
///
/// Never supplied by callers of the calculation; always produced by
/// [`Calculator::compute`](crate::calculator::Calculator::compute). Missing
/// fields deserialise as zero so that partially filled report payloads
/// still render.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioResult {
    /// Savings per month after automation cost and boost factor.
    pub monthly_savings: f64,
    /// Months for cumulative savings to cover the implementation cost.
    pub payback_months: Metric,
    /// Savings accumulated over the projection window.
    pub cumulative_savings: f64,
    /// Cumulative savings less the implementation cost.
    pub net_savings: f64,
    /// Net savings as a percentage of the implementation cost.
    pub roi_percentage: Metric,
}
