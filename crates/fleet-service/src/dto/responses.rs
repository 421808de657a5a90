//! Response DTOs for API endpoints
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use fleet_core::entities::{LogLevel, LogSource, RobotStatus, RobotType};
use fleet_core::{Page, PageMeta};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Common Responses
// ============================================================================

/// Offset-paginated list
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub meta: PageMeta,
    pub data: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Convert a page of entities, keeping its metadata
    pub fn from_page<E>(page: Page<E>) -> Self
    where
        T: From<E>,
    {
        let page = page.map(T::from);
        Self {
            meta: page.meta,
            data: page.items,
        }
    }
}

// ============================================================================
// Robot Responses
// ============================================================================

/// Public view of a robot; never carries the API key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub robot_type: RobotType,
    pub status: RobotStatus,
    pub battery: Option<f64>,
    pub location: Option<Value>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Successful registration, the only response that exposes the key
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRobotResponse {
    pub message: &'static str,
    pub robot: RobotResponse,
    pub api_key: String,
}

impl RegisterRobotResponse {
    pub fn new(robot: RobotResponse, api_key: String) -> Self {
        Self {
            message: "Robot registered successfully",
            robot,
            api_key,
        }
    }
}

/// Result of an authenticated status update
#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub message: &'static str,
    pub robot: RobotResponse,
}

impl StatusUpdateResponse {
    pub fn new(robot: RobotResponse) -> Self {
        Self {
            message: "Status updated",
            robot,
        }
    }
}

// ============================================================================
// Log Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    pub id: i64,
    pub robot_id: String,
    pub message: String,
    pub level: LogLevel,
    pub source: LogSource,
    pub meta: Option<Value>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
