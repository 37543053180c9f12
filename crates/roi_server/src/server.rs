//! Server startup and binding
//!
//! Provides functionality to start the Axum server with configurable host/port.

use std::sync::Arc;

use axum::Router;
use roi_store::ScenarioStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::{self, AppState};

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// Scenario store, initialised before serving
    store: ScenarioStore,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let store = ScenarioStore::new(&config.database_path);
        let router = routes::build_router(AppState::new(config.clone(), store.clone()));

        Self {
            config,
            store,
            router,
        }
    }

    /// Get the address string the server will bind to
    pub fn bind_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Run the server
    ///
    /// Creates the scenarios table if needed, binds to the configured
    /// host/port and serves until Ctrl-C.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.bind_addr()).await?;
        self.run_with_listener(listener).await
    }

    /// Run the server with a specific listener
    ///
    /// This is useful for testing where you want to use a listener bound to port 0
    /// to get a random available port.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        self.store.init().await?;

        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Create a test server and return the bound address
    ///
    /// This binds to port 0 to get a random available port, starts the server
    /// in a background task, and returns the actual bound address.
    #[cfg(test)]
    pub async fn spawn_test_server(
        config: ServerConfig,
    ) -> (std::net::SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Self::new(config);
        server.store.init().await.unwrap();
        let handle = tokio::spawn(async move {
            server.run_with_listener(listener).await.ok();
        });

        // Give the server a moment to start
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        (addr, handle)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> ServerConfig {
        ServerConfig {
            database_path: dir.path().join("scenarios.db"),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_server_bind_addr() {
        let mut config = ServerConfig::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;

        let server = Server::new(config);

        assert_eq!(server.bind_addr(), "127.0.0.1:3000");
    }

    #[tokio::test]
    async fn test_server_health_endpoint() {
        let dir = TempDir::new().unwrap();
        let (addr, handle) = Server::spawn_test_server(test_config(&dir)).await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "healthy");

        handle.abort();
    }

    #[tokio::test]
    async fn test_server_save_and_fetch_over_http() {
        let dir = TempDir::new().unwrap();
        let (addr, handle) = Server::spawn_test_server(test_config(&dir)).await;

        let client = reqwest::Client::new();
        let response = client
            .post(format!("http://{}/scenarios", addr))
            .json(&serde_json::json!({
                "scenario_name": "Over the wire",
                "monthly_invoice_volume": 1000,
                "hourly_wage": 30,
                "error_rate_manual": 5,
                "error_cost": 50,
                "one_time_implementation_cost": 10000
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let saved: serde_json::Value = response.json().await.unwrap();
        let id = saved["id"].as_i64().unwrap();

        let response = client
            .get(format!("http://{}/scenarios/{}", addr, id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let scenario: serde_json::Value = response.json().await.unwrap();
        assert_eq!(scenario["scenario_name"], "Over the wire");
        assert_eq!(scenario["roi_percentage"]["value"], 2375.0);

        handle.abort();
    }

    #[tokio::test]
    async fn test_server_unknown_route_returns_404() {
        let dir = TempDir::new().unwrap();
        let (addr, handle) = Server::spawn_test_server(test_config(&dir)).await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{}/unknown/path", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        handle.abort();
    }

    #[tokio::test]
    async fn test_run_fails_when_store_cannot_open() {
        let config = ServerConfig {
            database_path: "/nonexistent-dir/roi/scenarios.db".into(),
            ..ServerConfig::default()
        };
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        let err = Server::new(config)
            .run_with_listener(listener)
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Store(_)));
    }
}
