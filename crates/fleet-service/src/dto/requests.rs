//! Request DTOs for API endpoints
//!
//! Bodies whose fields may be absent, `null` or of the wrong JSON type are
//! decoded loosely and then turned into typed domain values by one explicit
//! validation step (`into_update`, `into_entry`) before anything is persisted.

use std::str::FromStr;

use fleet_core::entities::{LogLevel, LogSource, NewLogEntry, RobotStatus, StatusUpdate};
use fleet_core::DomainError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

// ============================================================================
// Robot Requests
// ============================================================================

/// Robot registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRobotRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(rename = "type", default)]
    #[validate(length(min = 1, message = "type is required"))]
    pub robot_type: String,

    /// Initial status, defaults to idle
    #[serde(default)]
    pub status: Option<String>,
}

/// Keep `null` distinguishable from an absent field: absent stays `None`
/// through `#[serde(default)]`, `null` arrives as `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Partial status update as received on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default, deserialize_with = "present")]
    pub battery: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub location: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub mode: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub error: Option<Value>,
}

impl UpdateStatusRequest {
    /// Validate the raw fields into a typed update
    ///
    /// # Errors
    /// `NoUpdatableFields` when nothing was supplied, `InvalidBattery` for a
    /// battery that is not a number in [0,100], `InvalidStatus` for a mode
    /// that is not a known status string.
    pub fn into_update(self) -> Result<StatusUpdate, DomainError> {
        if self.battery.is_none()
            && self.location.is_none()
            && self.mode.is_none()
            && self.error.is_none()
        {
            return Err(DomainError::NoUpdatableFields);
        }

        let battery = self
            .battery
            .map(|v| {
                v.as_f64()
                    .ok_or(DomainError::InvalidBattery)
                    .and_then(StatusUpdate::check_battery)
            })
            .transpose()?;

        let mode = self
            .mode
            .map(|v| match v {
                Value::String(s) => s.parse::<RobotStatus>(),
                other => Err(DomainError::InvalidStatus(other.to_string())),
            })
            .transpose()?;

        let location = self
            .location
            .map(|v| if v.is_null() { None } else { Some(v) });

        let error = self.error.map(|v| match v {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });

        Ok(StatusUpdate {
            battery,
            location,
            mode,
            error,
        })
    }
}

// ============================================================================
// Log Requests
// ============================================================================

/// Client-authored log entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLogRequest {
    #[serde(default)]
    pub message: Option<Value>,

    #[serde(default)]
    pub level: Option<Value>,

    #[serde(default)]
    pub source: Option<Value>,

    #[serde(default)]
    pub meta: Option<Value>,
}

/// Absent, `null` or blank falls back to the default; otherwise the text must name a variant
fn enum_or_default<T>(value: Option<Value>, field: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError> + Default,
{
    match value {
        None => Ok(T::default()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(T::default()),
        Some(Value::String(s)) => s.trim().parse(),
        Some(other) => Err(DomainError::ValidationError(format!(
            "{field} must be a string, got {other}"
        ))),
    }
}

impl CreateLogRequest {
    /// Validate into an entry authored by a client.
    ///
    /// Checks run in order: message, source (including the reserved
    /// `robot` value), then level.
    pub fn into_entry(self, robot_id: String) -> Result<NewLogEntry, DomainError> {
        let message = match self.message {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return Err(DomainError::EmptyLogMessage),
        };

        let source: LogSource = enum_or_default(self.source, "source")?;
        if !source.is_client_writable() {
            return Err(DomainError::RobotSourceForbidden);
        }

        let level: LogLevel = enum_or_default(self.level, "level")?;

        Ok(NewLogEntry::new(robot_id, message, level, source).with_meta(self.meta))
    }
}
