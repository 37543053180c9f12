//! Scenario data model.
//!
//! This module provides:
//! - `ScenarioInput`: per-request calculation parameters
//! - `ScenarioResult`: derived metrics, always recomputed
//! - `Metric`: a result value that is finite or unbounded
//! - `Scenario`, `ScenarioSummary`, `NewScenario`: persisted entity shapes

pub mod input;
pub mod metric;
pub mod result;
pub mod scenario;

pub use input::{ScenarioInput, DEFAULT_HORIZON_MONTHS, MAX_INPUT_MAGNITUDE};
pub use metric::Metric;
pub use result::ScenarioResult;
pub use scenario::{NewScenario, Scenario, ScenarioSummary};
