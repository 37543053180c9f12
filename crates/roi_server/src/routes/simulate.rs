//! Ad-hoc simulation endpoint
//!
//! Runs the calculator on the posted inputs without saving anything.

use axum::{extract::State, response::Json, routing::post, Router};
use roi_core::{ScenarioInput, ScenarioResult};

use super::AppState;

/// Build the simulation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/simulate", post(simulate_handler))
}

/// POST /simulate - Compute ROI metrics for the posted inputs
async fn simulate_handler(
    State(state): State<AppState>,
    Json(input): Json<ScenarioInput>,
) -> Json<ScenarioResult> {
    let result = state.calculator.compute(&input);
    tracing::debug!(
        monthly_savings = result.monthly_savings,
        payback_months = %result.payback_months,
        "simulation computed"
    );
    Json(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_json, create_test_state, empty_request, json_request};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_simulate_worked_example() {
        let (state, _dir) = create_test_state().await;
        let router = routes().with_state(state);

        let response = router
            .oneshot(json_request(
                "POST",
                "/simulate",
                json!({
                    "monthly_invoice_volume": 1000,
                    "hourly_wage": 30,
                    "error_rate_manual": 5,
                    "error_cost": 50,
                    "time_horizon_months": 36,
                    "one_time_implementation_cost": 10000
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;

        assert_eq!(body["monthly_savings"], 6875.0);
        assert_eq!(body["payback_months"], json!({"kind": "finite", "value": 1.45}));
        assert_eq!(body["cumulative_savings"], 247500.0);
        assert_eq!(body["net_savings"], 237500.0);
        assert_eq!(body["roi_percentage"], json!({"kind": "finite", "value": 2375.0}));
    }

    #[tokio::test]
    async fn test_simulate_empty_body_is_unbounded() {
        let (state, _dir) = create_test_state().await;
        let router = routes().with_state(state);

        let response = router
            .oneshot(json_request("POST", "/simulate", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: ScenarioResult = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(result.monthly_savings, 0.0);
        assert!(result.payback_months.is_unbounded());
        assert!(result.roi_percentage.is_unbounded());
    }

    #[tokio::test]
    async fn test_simulate_accepts_string_numbers() {
        let (state, _dir) = create_test_state().await;
        let router = routes().with_state(state);

        let response = router
            .oneshot(json_request(
                "POST",
                "/simulate",
                json!({
                    "monthly_invoice_volume": "1000",
                    "hourly_wage": "30",
                    "error_rate_manual": "5",
                    "error_cost": "50",
                    "one_time_implementation_cost": "10000"
                }),
            ))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["monthly_savings"], 6875.0);
    }

    #[tokio::test]
    async fn test_simulate_rejects_malformed_json() {
        let (state, _dir) = create_test_state().await;
        let router = routes().with_state(state);

        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/simulate")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_simulate_is_post_only() {
        let (state, _dir) = create_test_state().await;
        let router = routes().with_state(state);

        let response = router
            .oneshot(empty_request("GET", "/simulate"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
