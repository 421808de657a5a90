//! Log entry entity - an append-only record tied to a robot

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [Self; 3] = [Self::Info, Self::Warn, Self::Error];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"WARN"` parses as `Warn`
impl FromStr for LogLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == lowered)
            .ok_or_else(|| DomainError::InvalidLogLevel(s.to_string()))
    }
}

/// Who authored a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    /// Machine-originated; never accepted from clients
    Robot,
    /// Written by a client through the log endpoint
    #[default]
    Manual,
    /// Emitted by the registry itself (status updates)
    System,
    Operator,
}

impl LogSource {
    pub const ALL: [Self; 4] = [Self::Robot, Self::Manual, Self::System, Self::Operator];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Robot => "robot",
            Self::Manual => "manual",
            Self::System => "system",
            Self::Operator => "operator",
        }
    }

    /// Whether a client may author entries with this source
    #[inline]
    pub fn is_client_writable(self) -> bool {
        self != Self::Robot
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `"Operator"` parses as `Operator`
impl FromStr for LogSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|src| src.as_str() == lowered)
            .ok_or_else(|| DomainError::InvalidLogSource(s.to_string()))
    }
}

/// Stored log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Storage-assigned, increasing in insertion order
    pub id: i64,
    pub robot_id: String,
    pub message: String,
    pub level: LogLevel,
    pub source: LogSource,
    pub meta: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// Log entry before it has been persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub robot_id: String,
    pub message: String,
    pub level: LogLevel,
    pub source: LogSource,
    pub meta: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl NewLogEntry {
    /// Create an entry stamped with the current server time
    pub fn new(robot_id: String, message: String, level: LogLevel, source: LogSource) -> Self {
        Self {
            robot_id,
            message,
            level,
            source,
            meta: None,
            created_at: Utc::now(),
        }
    }

    /// Attach structured metadata
    pub fn with_meta(mut self, meta: Option<Value>) -> Self {
        self.meta = meta;
        self
    }

    /// Finish the entry with the id assigned by storage
    pub fn into_entry(self, id: i64) -> LogEntry {
        LogEntry {
            id,
            robot_id: self.robot_id,
            message: self.message,
            level: self.level,
            source: self.source,
            meta: self.meta,
            created_at: self.created_at,
        }
    }
}
