//! Route handlers
//!
//! HTTP request handlers organized by resource.

pub mod health;
pub mod logs;
pub mod robots;

use crate::response::ApiError;

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
