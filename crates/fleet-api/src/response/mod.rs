//! Response types and error handling for API endpoints
//!
//! Every failure leaves the server as `{"error", "code", "details"?, "robot"?}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fleet_common::{AppError, ErrorResponse};
use fleet_core::DomainError;
use fleet_service::dto::RobotResponse;
use fleet_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Generic text returned for any 5xx
const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => e.status_code(),
            Self::Validation(_) | Self::InvalidBody(_) | Self::InvalidQuery(_) => 400,
            Self::RouteNotFound => 404,
            Self::MethodNotAllowed => 405,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::RouteNotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Message shown to the client; a 500 never reveals its cause
    fn public_message(&self) -> String {
        match self {
            _ if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR => {
                INTERNAL_MESSAGE.to_string()
            }
            Self::App(e) => e.public_message(),
            other => other.to_string(),
        }
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

/// Error response body; `robot` is set only for a registration conflict
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(flatten)]
    pub error: ErrorResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot: Option<RobotResponse>,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        let details = match err {
            ApiError::Validation(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        };
        let robot = match err {
            ApiError::Service(ServiceError::RobotConflict(robot)) => Some(robot.as_ref().clone()),
            _ => None,
        };

        Self {
            error: ErrorResponse {
                error: err.public_message(),
                code: err.error_code().to_string(),
                details,
            },
            robot,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, status = status.as_u16(), "Server error occurred");
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
