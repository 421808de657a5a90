//! Application error types
//!
//! Errors raised outside the services: startup, storage wiring and the
//! transport boundary (rate limiting, timeouts).

use fleet_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Rate limiting
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    // Backing store unreachable or request timed out
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::RateLimitExceeded => 429,
            Self::Unavailable(_) => 503,
            Self::Database(_) | Self::Config(_) => 500,
            Self::Domain(e) => e.status_code(),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Message safe to show a client.
    ///
    /// Server errors collapse to a generic text; the cause stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            _ if self.status_code() == 500 => "Internal server error".to_string(),
            Self::Unavailable(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.public_message(),
            code: err.error_code().to_string(),
            details: None,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
