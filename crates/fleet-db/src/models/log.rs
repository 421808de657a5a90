//! Robot log database model

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the robot_logs table
#[derive(Debug, Clone, FromRow)]
pub struct LogModel {
    pub id: i64,
    pub robot_id: String,
    pub message: String,
    pub level: String,
    pub source: String,
    pub meta: Option<Json<Value>>,
    pub created_at: DateTime<Utc>,
}
