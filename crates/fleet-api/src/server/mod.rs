//! Server setup and initialization
//!
//! Builds the application, wires the configured storage backend and runs
//! the HTTP server until a shutdown signal arrives.

use std::future::Future;

use axum::Router;
use fleet_common::{AppConfig, AppError, AppResult, StorageBackend};
use fleet_db::{create_pool, ensure_schema, PoolConfig};
use fleet_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::handlers;
use crate::middleware::{apply_middleware, normalize_error_response};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes are merged after the middleware so they are never rate limited.
/// Bare 405/429/503 responses are rewritten into the JSON error body.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let router = apply_middleware(create_router(), state.config())?;
    Ok(router
        .merge(health_routes())
        .layer(axum::middleware::map_response(normalize_error_response))
        .fallback(handlers::not_found)
        .with_state(state))
}

/// Initialize the storage backend and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = match config.storage.backend {
        StorageBackend::Postgres => {
            let db = config.database.as_ref().ok_or_else(|| {
                AppError::Config("DATABASE_URL is required for the postgres backend".to_string())
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(db))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            ServiceContext::postgres(pool)
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is lost on exit");
            ServiceContext::in_memory()
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Serve `state` on an already bound listener until `shutdown` resolves
///
/// In-flight requests are drained before returning; the database pool, if
/// any, is closed last.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let pool = state.service_context().pool().cloned();
    let app = create_app(state)?;

    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("HTTP server stopped, in-flight requests drained");

    if let Some(pool) = pool {
        pool.close().await;
        info!("Database pool closed");
    }

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, state, shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
