//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Robot not found: {0}")]
    RobotNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Robot id required in path or body")]
    MissingRobotId,

    #[error("Invalid robot type: {0} (expected AMR, Drone or Arm)")]
    InvalidRobotType(String),

    #[error("Invalid status: {0} (expected idle, active, charging or error)")]
    InvalidStatus(String),

    #[error("battery must be a number between 0 and 100")]
    InvalidBattery,

    #[error("No updatable fields provided")]
    NoUpdatableFields,

    #[error("message is required for logs")]
    EmptyLogMessage,

    #[error("Invalid level value: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid source value: {0}")]
    InvalidLogSource(String),

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Missing x-api-key header")]
    MissingApiKey,

    #[error("Invalid API key")]
    InvalidApiKey,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Direct robot-sourced logs not allowed from clients")]
    RobotSourceForbidden,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Robot with this ID already exists: {0}")]
    RobotAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::RobotNotFound(_) => "UNKNOWN_ROBOT",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingRobotId => "MISSING_ROBOT_ID",
            Self::InvalidRobotType(_) => "INVALID_ROBOT_TYPE",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidBattery => "INVALID_BATTERY",
            Self::NoUpdatableFields => "NO_UPDATABLE_FIELDS",
            Self::EmptyLogMessage => "EMPTY_LOG_MESSAGE",
            Self::InvalidLogLevel(_) => "INVALID_LOG_LEVEL",
            Self::InvalidLogSource(_) => "INVALID_LOG_SOURCE",

            Self::MissingApiKey => "MISSING_API_KEY",
            Self::InvalidApiKey => "INVALID_API_KEY",

            Self::RobotSourceForbidden => "ROBOT_SOURCE_FORBIDDEN",

            Self::RobotAlreadyExists(_) => "ROBOT_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RobotNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingRobotId
                | Self::InvalidRobotType(_)
                | Self::InvalidStatus(_)
                | Self::InvalidBattery
                | Self::NoUpdatableFields
                | Self::EmptyLogMessage
                | Self::InvalidLogLevel(_)
                | Self::InvalidLogSource(_)
        )
    }

    /// Check if this is an authentication error (missing or wrong secret)
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::InvalidApiKey)
    }

    /// Check if this is an authorization error (allowed caller, disallowed value)
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::RobotSourceForbidden)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RobotAlreadyExists(_))
    }

    /// HTTP-equivalent status for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() {
            400
        } else if self.is_authentication() {
            401
        } else if self.is_authorization() {
            403
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}
