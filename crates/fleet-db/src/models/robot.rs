//! Robot database model

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for the robots table (without the `api_key` column)
#[derive(Debug, Clone, FromRow)]
pub struct RobotModel {
    pub id: String,
    pub name: String,
    #[sqlx(rename = "type")]
    pub robot_type: String,
    pub status: String,
    pub battery: Option<f64>,
    pub location: Option<Json<Value>>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
