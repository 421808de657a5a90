//! Robot entity - a registered agent with identity, type, and operating status

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::LogLevel;
use crate::error::DomainError;

/// Robot hardware class, fixed at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotType {
    #[serde(rename = "AMR")]
    Amr,
    Drone,
    Arm,
}

impl RobotType {
    pub const ALL: [Self; 3] = [Self::Amr, Self::Drone, Self::Arm];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amr => "AMR",
            Self::Drone => "Drone",
            Self::Arm => "Arm",
        }
    }
}

impl fmt::Display for RobotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::InvalidRobotType(s.to_string()))
    }
}

/// Operating status of a robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RobotStatus {
    #[default]
    Idle,
    Active,
    Charging,
    Error,
}

impl RobotStatus {
    pub const ALL: [Self; 4] = [Self::Idle, Self::Active, Self::Charging, Self::Error];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Charging => "charging",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| DomainError::InvalidStatus(s.to_string()))
    }
}

/// Robot entity. The API key is deliberately not part of the entity;
/// it lives only in storage and is read through `RobotRepository::find_api_key`.
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    pub id: String,
    pub name: String,
    pub robot_type: RobotType,
    pub status: RobotStatus,
    pub battery: Option<f64>,
    pub location: Option<Value>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Robot {
    /// Create a freshly registered robot
    pub fn new(id: String, name: String, robot_type: RobotType, status: RobotStatus) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            robot_type,
            status,
            battery: None,
            location: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated partial status update in place
    pub fn apply(&mut self, update: &StatusUpdate) {
        if let Some(battery) = update.battery {
            self.battery = Some(battery);
        }
        if let Some(location) = &update.location {
            self.location.clone_from(location);
        }
        if let Some(error) = &update.error {
            self.error.clone_from(error);
        }
        if let Some(status) = update.effective_status() {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated partial status update.
///
/// Outer `Option` means "field supplied"; for `location` and `error` an inner
/// `None` means the client sent `null` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusUpdate {
    pub battery: Option<f64>,
    pub location: Option<Option<Value>>,
    pub mode: Option<RobotStatus>,
    pub error: Option<Option<String>>,
}

impl StatusUpdate {
    /// Validate a battery reading
    pub fn check_battery(battery: f64) -> Result<f64, DomainError> {
        if battery.is_finite() && (0.0..=100.0).contains(&battery) {
            Ok(battery)
        } else {
            Err(DomainError::InvalidBattery)
        }
    }

    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.battery.is_none()
            && self.location.is_none()
            && self.mode.is_none()
            && self.error.is_none()
    }

    /// True when a non-null error text was supplied
    pub fn reports_error(&self) -> bool {
        matches!(self.error, Some(Some(_)))
    }

    /// Status to persist: a reported error wins over any supplied mode
    pub fn effective_status(&self) -> Option<RobotStatus> {
        if self.reports_error() {
            Some(RobotStatus::Error)
        } else {
            self.mode
        }
    }

    /// Level of the derived log entry
    pub fn log_level(&self) -> LogLevel {
        if self.reports_error() {
            LogLevel::Error
        } else {
            LogLevel::Info
        }
    }

    /// Human-readable summary of the supplied fields, e.g.
    /// `Status update: battery=40%, mode=active`
    pub fn summary(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if let Some(battery) = self.battery {
            parts.push(format!("battery={battery}%"));
        }
        if let Some(mode) = self.mode {
            parts.push(format!("mode={mode}"));
        }
        if let Some(location) = &self.location {
            let text = location
                .as_ref()
                .map_or_else(|| "null".to_string(), Value::to_string);
            parts.push(format!("location={text}"));
        }
        if let Some(error) = &self.error {
            parts.push(format!("error={}", error.as_deref().unwrap_or("null")));
        }

        if parts.is_empty() {
            "Status updated".to_string()
        } else {
            format!("Status update: {}", parts.join(", "))
        }
    }

    /// Structured copy of the applied fields, stored as the log entry's `meta`
    pub fn to_meta(&self) -> Value {
        let mut update = Map::new();
        if let Some(battery) = self.battery {
            update.insert("battery".to_string(), Value::from(battery));
        }
        if let Some(location) = &self.location {
            update.insert(
                "location".to_string(),
                location.clone().unwrap_or(Value::Null),
            );
        }
        if let Some(status) = self.effective_status() {
            update.insert("status".to_string(), Value::from(status.as_str()));
        }
        if let Some(error) = &self.error {
            update.insert(
                "error".to_string(),
                error.clone().map_or(Value::Null, Value::from),
            );
        }

        let mut meta = Map::new();
        meta.insert("update".to_string(), Value::Object(update));
        Value::Object(meta)
    }
}
