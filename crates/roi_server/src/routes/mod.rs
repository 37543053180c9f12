//! Route modules for the ROI server
//!
//! This module contains endpoint group-specific routers:
//! - simulate: Ad-hoc ROI calculation
//! - scenarios: Saved scenario CRUD
//! - report: HTML report generation with lead capture
//! - health: Health check and readiness endpoints

pub mod health;
pub mod report;
pub mod scenarios;
pub mod simulate;

use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use roi_core::Calculator;
use roi_store::ScenarioStore;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Saved scenario storage
    pub store: ScenarioStore,
    /// Calculator with the production coefficients
    pub calculator: Calculator,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>, store: ScenarioStore) -> Self {
        Self {
            config,
            store,
            calculator: Calculator::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Replace the calculator
    pub fn with_calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = calculator;
        self
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(state: AppState) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        .merge(health::routes())
        .merge(simulate::routes())
        .merge(scenarios::routes())
        .merge(report::routes())
        .with_state(state);

    let router = if cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use tempfile::TempDir;

    /// State backed by a fresh on-disk store. Keep the `TempDir` alive.
    pub async fn create_test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = ScenarioStore::open(dir.path().join("scenarios.db"))
            .await
            .unwrap();
        let state = AppState::new(Arc::new(ServerConfig::default()), store);
        (state, dir)
    }

    pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }
}
