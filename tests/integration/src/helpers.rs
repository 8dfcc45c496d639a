//! Test helpers for integration tests
//!
//! Spawns the full application on an ephemeral port and wraps `reqwest`.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use guild_api::{create_app, create_app_state, AppState};
use guild_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Schema files shared with the server binary
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations");

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state.clone())?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request carrying the sync token header
    pub async fn post_sync(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let mut request = self.client.post(&url);
        if let Some(token) = token {
            request = request.header("x-sync-token", token);
        }
        Ok(request.send().await?)
    }
}

/// Configuration from the environment, with migrations forced on
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.pool.max_connections = 2;
    config.pool.run_migrations = true;
    config.pool.migrations_dir = MIGRATIONS_DIR.to_string();
    config.sync.enabled = false;

    Ok(config)
}

/// Helper to check if a test database is configured
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() && std::env::var("DATABASE_TYPE").is_err() {
        eprintln!("Skipping test: DATABASE_URL / DATABASE_TYPE not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
