//! Route definitions
//!
//! Robot and log resources are mounted at the root; health probes are
//! exported separately so they bypass rate limiting.

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::{health, logs, robots};
use crate::state::AppState;

/// Create the main API router (excluding health, see [`health_routes`])
pub fn create_router() -> Router<AppState> {
    Router::new().merge(robot_routes()).merge(log_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Robot routes
fn robot_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/robots",
            get(robots::list_robots).post(robots::register_robot),
        )
        .route("/robots/:id", get(robots::get_robot))
        .route("/robots/:id/status", patch(robots::update_status))
}

/// Log routes
fn log_routes() -> Router<AppState> {
    Router::new().route(
        "/robots/:id/logs",
        get(logs::list_logs).post(logs::create_log),
    )
}
