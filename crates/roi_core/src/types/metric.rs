//! Tagged metric values.
//!
//! Payback period and ROI have no finite value when their denominator is
//! non-positive. Rather than leaking `f64::INFINITY` into JSON (which has no
//! representation for it), such values are carried as `Metric::Unbounded`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A result value that is either a finite number or unbounded.
///
/// Serialises as `{"kind":"finite","value":1.45}` or `{"kind":"unbounded"}`.
///
/// # Examples
/// ```
/// use roi_core::types::Metric;
///
/// assert_eq!(Metric::from_f64(2.5), Metric::Finite(2.5));
/// assert_eq!(Metric::from_f64(f64::INFINITY), Metric::Unbounded);
/// assert_eq!(Metric::Unbounded.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Metric {
    /// A finite numeric value.
    Finite(f64),
    /// No finite value exists (e.g. savings never recover the cost).
    Unbounded,
}

impl Metric {
    /// Wrap a raw float, mapping infinities and NaN to `Unbounded`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Metric::Finite(value)
        } else {
            Metric::Unbounded
        }
    }

    /// Decode a stored column value. `NULL` and stored infinities are unbounded.
    #[inline]
    pub fn from_stored(value: Option<f64>) -> Self {
        value.map_or(Metric::Unbounded, Metric::from_f64)
    }

    /// The finite value, if any.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Finite(v) => Some(*v),
            Metric::Unbounded => None,
        }
    }

    /// Whether this metric has no finite value.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Metric::Unbounded)
    }

    /// Apply `f` to the finite value, leaving `Unbounded` untouched.
    #[inline]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Metric::Finite(v) => Metric::from_f64(f(v)),
            Metric::Unbounded => Metric::Unbounded,
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Finite(0.0)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Finite(v) => write!(f, "{:.2}", v),
            Metric::Unbounded => write!(f, "unbounded"),
        }
    }
}
