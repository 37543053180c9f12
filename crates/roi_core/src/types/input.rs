//! Scenario input parameters.

use serde::{Deserialize, Deserializer, Serialize};

/// Projection window used when a request omits `time_horizon_months`.
pub const DEFAULT_HORIZON_MONTHS: i64 = 36;

/// Largest magnitude accepted for any numeric input.
///
/// Keeps every derived amount finite: the largest product in the formula
/// is bounded by roughly `MAX_INPUT_MAGNITUDE^4`, far below `f64::MAX`.
pub const MAX_INPUT_MAGNITUDE: f64 = 1e12;

/// Calculation parameters supplied with each request.
///
/// Every numeric field accepts a JSON number or a numeric string. Missing,
/// `null` and blank values fall back to zero (36 for the horizon). Values
/// beyond [`MAX_INPUT_MAGNITUDE`] are rejected.
///
/// # Examples
/// ```
/// use roi_core::types::ScenarioInput;
///
/// let input: ScenarioInput =
///     serde_json::from_str(r#"{"monthly_invoice_volume": "1200", "hourly_wage": 28}"#).unwrap();
/// assert_eq!(input.monthly_invoice_volume, 1200.0);
/// assert_eq!(input.hourly_wage, 28.0);
/// assert_eq!(input.time_horizon_months, 36);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    /// Invoices processed per month.
    #[serde(deserialize_with = "lenient::number")]
    pub monthly_invoice_volume: f64,
    /// Fully loaded staff cost per hour.
    #[serde(deserialize_with = "lenient::number")]
    pub hourly_wage: f64,
    /// Manual error rate in percent (5.0 means 5%).
    #[serde(deserialize_with = "lenient::number")]
    pub error_rate_manual: f64,
    /// Cost to remediate one invoice error.
    #[serde(deserialize_with = "lenient::number")]
    pub error_cost: f64,
    /// Projection window in months.
    #[serde(deserialize_with = "lenient::months")]
    pub time_horizon_months: i64,
    /// Upfront automation cost.
    #[serde(deserialize_with = "lenient::number")]
    pub one_time_implementation_cost: f64,
    /// Legacy head-count field. Stored, not used by the calculation.
    #[serde(deserialize_with = "lenient::optional_number")]
    pub num_ap_staff: Option<f64>,
    /// Legacy per-invoice effort field. Stored, not used by the calculation.
    #[serde(deserialize_with = "lenient::optional_number")]
    pub avg_hours_per_invoice: Option<f64>,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            monthly_invoice_volume: 0.0,
            hourly_wage: 0.0,
            error_rate_manual: 0.0,
            error_cost: 0.0,
            time_horizon_months: DEFAULT_HORIZON_MONTHS,
            one_time_implementation_cost: 0.0,
            num_ap_staff: None,
            avg_hours_per_invoice: None,
        }
    }
}

mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<NumberOrText>::deserialize(deserializer)? {
            None => return Ok(None),
            Some(NumberOrText::Number(n)) => n,
            Some(NumberOrText::Text(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                s.parse::<f64>()
                    .map_err(|_| serde::de::Error::custom(format!("invalid number: {:?}", s)))?
            }
        };

        if !value.is_finite() {
            return Err(serde::de::Error::custom("number must be finite"));
        }
        if value.abs() > MAX_INPUT_MAGNITUDE {
            return Err(serde::de::Error::custom(format!(
                "number out of range: {} exceeds {:e}",
                value, MAX_INPUT_MAGNITUDE
            )));
        }
        Ok(Some(value))
    }

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_number(deserializer)?.unwrap_or(0.0))
    }

    pub fn months<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Fractional horizons truncate toward zero.
        Ok(optional_number(deserializer)?
            .map(|m| m.trunc() as i64)
            .unwrap_or(DEFAULT_HORIZON_MONTHS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let input: ScenarioInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, ScenarioInput::default());
        assert_eq!(input.time_horizon_months, 36);
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let input: ScenarioInput = serde_json::from_str(
            r#"{"hourly_wage": null, "time_horizon_months": null, "num_ap_staff": null}"#,
        )
        .unwrap();
        assert_eq!(input.hourly_wage, 0.0);
        assert_eq!(input.time_horizon_months, 36);
        assert_eq!(input.num_ap_staff, None);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let input: ScenarioInput = serde_json::from_str(
            r#"{"monthly_invoice_volume": " 1000 ", "error_rate_manual": "2.5", "time_horizon_months": "24"}"#,
        )
        .unwrap();
        assert_eq!(input.monthly_invoice_volume, 1000.0);
        assert_eq!(input.error_rate_manual, 2.5);
        assert_eq!(input.time_horizon_months, 24);
    }

    #[test]
    fn test_blank_string_is_treated_as_missing() {
        let input: ScenarioInput =
            serde_json::from_str(r#"{"error_cost": "", "time_horizon_months": "  "}"#).unwrap();
        assert_eq!(input.error_cost, 0.0);
        assert_eq!(input.time_horizon_months, 36);
    }

    #[test]
    fn test_fractional_horizon_truncates() {
        let input: ScenarioInput =
            serde_json::from_str(r#"{"time_horizon_months": 12.9}"#).unwrap();
        assert_eq!(input.time_horizon_months, 12);
    }

    #[test]
    fn test_legacy_fields_are_kept() {
        let input: ScenarioInput =
            serde_json::from_str(r#"{"num_ap_staff": 4, "avg_hours_per_invoice": "0.25"}"#)
                .unwrap();
        assert_eq!(input.num_ap_staff, Some(4.0));
        assert_eq!(input.avg_hours_per_invoice, Some(0.25));
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        let err = serde_json::from_str::<ScenarioInput>(r#"{"hourly_wage": "thirty"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_non_finite_string_is_rejected() {
        let err = serde_json::from_str::<ScenarioInput>(r#"{"error_cost": "inf"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        let err = serde_json::from_str::<ScenarioInput>(r#"{"monthly_invoice_volume": 1e307}"#);
        assert!(err.is_err());

        let err = serde_json::from_str::<ScenarioInput>(r#"{"time_horizon_months": "-2e12"}"#);
        assert!(err.is_err());

        let input: ScenarioInput =
            serde_json::from_str(r#"{"monthly_invoice_volume": 1e12}"#).unwrap();
        assert_eq!(input.monthly_invoice_volume, 1e12);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let input: ScenarioInput =
            serde_json::from_str(r#"{"scenario_name": "Q3", "hourly_wage": 40}"#).unwrap();
        assert_eq!(input.hourly_wage, 40.0);
    }

    mod property_tests {
        use super::*;
        use crate::calculator::Calculator;
        use proptest::prelude::*;

        fn any_finite() -> impl Strategy<Value = f64> {
            prop::num::f64::POSITIVE
                | prop::num::f64::NEGATIVE
                | prop::num::f64::NORMAL
                | prop::num::f64::SUBNORMAL
                | prop::num::f64::ZERO
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_decoded_inputs_always_price_to_finite_amounts(
                values in prop::array::uniform6(any_finite())
            ) {
                let body = serde_json::json!({
                    "monthly_invoice_volume": values[0],
                    "hourly_wage": values[1],
                    "error_rate_manual": values[2],
                    "error_cost": values[3],
                    "time_horizon_months": values[4],
                    "one_time_implementation_cost": values[5],
                });
                let in_range = values.iter().all(|v| v.abs() <= MAX_INPUT_MAGNITUDE);

                match serde_json::from_value::<ScenarioInput>(body) {
                    Ok(input) => {
                        prop_assert!(in_range);
                        let r = Calculator::default().compute(&input);
                        prop_assert!(r.monthly_savings.is_finite());
                        prop_assert!(r.cumulative_savings.is_finite());
                        prop_assert!(r.net_savings.is_finite());
                        for metric in [r.payback_months, r.roi_percentage] {
                            prop_assert!(metric.value().map_or(true, f64::is_finite));
                        }
                    }
                    Err(_) => prop_assert!(!in_range),
                }
            }
        }
    }
}
