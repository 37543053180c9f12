//! # roi_core: ROI Projection for Invoice Automation
//!
//! ## Core Layer Role
//!
//! roi_core is the bottom layer of the workspace, providing:
//! - Scenario inputs and derived results (`types`)
//! - Tagged metric values for unbounded payback/ROI (`types::metric`)
//! - The closed-form savings calculator (`calculator`)
//!
//! The crate performs no I/O. Persistence lives in `roi_store` and the
//! HTTP surface in `roi_server`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use roi_core::calculator::Calculator;
//! use roi_core::types::{Metric, ScenarioInput};
//!
//! let input = ScenarioInput {
//!     monthly_invoice_volume: 1000.0,
//!     hourly_wage: 30.0,
//!     error_rate_manual: 5.0,
//!     error_cost: 50.0,
//!     time_horizon_months: 36,
//!     one_time_implementation_cost: 10_000.0,
//!     ..Default::default()
//! };
//!
//! let result = Calculator::default().compute(&input);
//! assert_eq!(result.monthly_savings, 6875.0);
//! assert_eq!(result.payback_months, Metric::Finite(1.45));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod calculator;
pub mod types;

pub use calculator::{Calculator, CalculatorParams, SavingsBreakdown};
pub use types::{Metric, NewScenario, Scenario, ScenarioInput, ScenarioResult, ScenarioSummary};
