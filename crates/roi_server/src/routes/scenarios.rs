//! Saved scenario endpoints
//!
//! List, fetch, save and delete named scenarios. Saving always reprices the
//! posted inputs; results are never taken from the request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use roi_core::{NewScenario, Scenario, ScenarioInput, ScenarioSummary};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppState;
use crate::error::ApiError;

/// Outcome of a save or delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    /// Id of the saved scenario
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// Build the scenario routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/scenarios", get(list_handler).post(save_handler))
        .route("/scenarios/{id}", get(get_handler).delete(delete_handler))
}

/// GET /scenarios - Scenario ids and names, ordered by name
async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScenarioSummary>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

/// GET /scenarios/{id} - One saved scenario with inputs and results
async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Scenario>, ApiError> {
    Ok(Json(state.store.get(id).await?))
}

/// POST /scenarios - Price and save a named scenario
///
/// The body is the scenario inputs plus `scenario_name`. The name is checked
/// before any numeric field is decoded.
async fn save_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let name = match body.get("scenario_name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(ApiError::Validation("scenario_name is required".to_string())),
    };

    let input: ScenarioInput = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("Invalid scenario input: {}", e)))?;

    let scenario = NewScenario::priced(name, input, &state.calculator);
    let id = state.store.insert(&scenario).await?;

    tracing::info!(scenario_id = id, name = %scenario.scenario_name, "scenario saved");

    let response = StatusResponse {
        status: "success".to_string(),
        message: format!("Scenario '{}' saved.", scenario.scenario_name),
        id: Some(id),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /scenarios/{id} - Remove a scenario; unknown ids also succeed
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.store.delete(id).await?;

    tracing::info!(scenario_id = id, "scenario deleted");

    Ok(Json(StatusResponse {
        status: "success".to_string(),
        message: "Scenario deleted.".to_string(),
        id: None,
    }))
}
