//! Test fixtures and wire types
//!
//! Mirrors the JSON the server speaks so tests can assert on typed values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRobot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub robot_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RegisterRobot {
    pub fn new(id: &str, robot_type: &str) -> Self {
        Self {
            id: id.to_string(),
            name: "Bot".to_string(),
            robot_type: robot_type.to_string(),
            status: None,
        }
    }

    /// The robot from the documented example: RBT001, "Bot", AMR
    pub fn example() -> Self {
        Self::new("RBT001", "AMR")
    }
}

/// Public robot view
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub robot_type: String,
    pub status: String,
    pub battery: Option<f64>,
    pub location: Option<Value>,
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// 201 body of `POST /robots`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub robot: Robot,
    pub api_key: String,
}

/// 200 body of `PATCH /robots/:id/status`
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub robot: Robot,
}

/// Log entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: i64,
    pub robot_id: String,
    pub message: String,
    pub level: String,
    pub source: String,
    pub meta: Option<Value>,
    pub created_at: String,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

/// Paginated list body
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub meta: PageMeta,
    pub data: Vec<T>,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub details: Option<Value>,
    pub robot: Option<Robot>,
}
