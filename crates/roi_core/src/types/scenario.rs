//! Persisted scenario shapes.

use serde::{Deserialize, Serialize};

use super::input::ScenarioInput;
use super::result::ScenarioResult;
use crate::calculator::Calculator;

/// A named scenario as stored: inputs plus the results computed at save time.
///
/// Serialises flat, with input and result fields alongside `id` and
/// `scenario_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name; never empty.
    pub scenario_name: String,
    /// Inputs as saved.
    #[serde(flatten)]
    pub input: ScenarioInput,
    /// Results snapshotted at save time.
    #[serde(flatten)]
    pub result: ScenarioResult,
}

/// The listing projection of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub scenario_name: String,
}

/// A scenario ready to be inserted, with its results already computed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScenario {
    /// Display name.
    pub scenario_name: String,
    /// Inputs to persist.
    pub input: ScenarioInput,
    /// Results snapshot.
    pub result: ScenarioResult,
}

impl NewScenario {
    /// Price `input` with `calculator` and pair the snapshot with its name.
    pub fn priced(
        scenario_name: impl Into<String>,
        input: ScenarioInput,
        calculator: &Calculator,
    ) -> Self {
        let result = calculator.compute(&input);
        Self {
            scenario_name: scenario_name.into(),
            input,
            result,
        }
    }
}
