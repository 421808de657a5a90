//! Test helpers for integration tests
//!
//! Provides a self-contained test server and response assertions.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use fleet_api::{create_app_state, serve};
use fleet_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::fixtures::{RegisterRobot, RegisterResponse};

/// Header carrying a robot's API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Running server backed by a fresh in-memory store
///
/// The server is shut down gracefully when the value is dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    shutdown: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;

        // Port 0 lets the OS pick a free port; connections queue until serve runs
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async move {
                shutdown_rx.await.ok();
            };
            if let Err(e) = serve(listener, state, shutdown).await {
                eprintln!("test server failed: {e}");
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            shutdown: Some(shutdown_tx),
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

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a PATCH request with JSON body, optionally carrying an API key
    pub async fn patch_with_key<T: Serialize + ?Sized>(
        &self,
        path: &str,
        api_key: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let mut request = self.client.patch(&url).json(body);
        if let Some(key) = api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        Ok(request.send().await?)
    }

    /// Register a robot and return the 201 body
    pub async fn register_robot(&self, robot: &RegisterRobot) -> Result<RegisterResponse> {
        let response = self.post("/robots", robot).await?;
        assert_json(response, StatusCode::CREATED).await
    }

    /// Update a robot's status with its key
    pub async fn update_status<T: Serialize + ?Sized>(
        &self,
        id: &str,
        api_key: &str,
        body: &T,
    ) -> Result<Response> {
        self.patch_with_key(&format!("/robots/{id}/status"), Some(api_key), body)
            .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
    }
}

/// Memory-backed configuration with limits high enough for bulk tests
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::in_memory();
    config.rate_limit.requests_per_second = 10_000;
    config.rate_limit.burst = 10_000;
    config
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
