//! Log entry entity <-> model mapper

use fleet_core::entities::{LogEntry, NewLogEntry};
use fleet_core::error::DomainError;
use serde_json::Value;
use sqlx::types::Json;

use crate::models::LogModel;

/// Convert LogModel to LogEntry entity
impl TryFrom<LogModel> for LogEntry {
    type Error = DomainError;

    fn try_from(model: LogModel) -> Result<Self, Self::Error> {
        let corrupt = |e: DomainError| DomainError::DatabaseError(format!("corrupt log row: {e}"));

        Ok(LogEntry {
            id: model.id,
            level: model.level.parse().map_err(corrupt)?,
            source: model.source.parse().map_err(corrupt)?,
            robot_id: model.robot_id,
            message: model.message,
            meta: model.meta.map(|Json(v)| v),
            created_at: model.created_at,
        })
    }
}

/// Log entry prepared for insertion
pub struct LogInsert<'a> {
    pub robot_id: &'a str,
    pub message: &'a str,
    pub level: &'static str,
    pub source: &'static str,
    pub meta: Option<Json<&'a Value>>,
}

impl<'a> LogInsert<'a> {
    pub fn new(entry: &'a NewLogEntry) -> Self {
        Self {
            robot_id: &entry.robot_id,
            message: &entry.message,
            level: entry.level.as_str(),
            source: entry.source.as_str(),
            meta: entry.meta.as_ref().map(Json),
        }
    }
}
