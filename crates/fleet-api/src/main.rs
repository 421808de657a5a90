//! Fleet registry API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p fleet-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` when present).

use anyhow::Context;
use fleet_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let env = std::env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse::<Environment>().ok())
        .unwrap_or_default();

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!("Server failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting fleet registry API server...");

    let config = AppConfig::from_env().context("failed to load configuration")?;

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        backend = ?config.storage.backend,
        "Configuration loaded"
    );

    fleet_api::run(config).await.context("server error")?;

    Ok(())
}
