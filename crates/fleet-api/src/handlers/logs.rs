//! Log handlers

use axum::{
    extract::{Path, State},
    Json,
};
use fleet_service::dto::{CreateLogRequest, LogResponse, PaginatedResponse};
use fleet_service::LogService;

use crate::extractors::{JsonBody, Pagination};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Append a client-authored log entry
///
/// POST /robots/{id}/logs
pub async fn create_log(
    State(state): State<AppState>,
    Path(robot_id): Path<String>,
    JsonBody(request): JsonBody<CreateLogRequest>,
) -> ApiResult<Created<Json<LogResponse>>> {
    let service = LogService::new(state.service_context());
    let log = service.create_log(&robot_id, request).await?;
    Ok(Created(Json(log)))
}

/// List a robot's log entries, newest first
///
/// GET /robots/{id}/logs?page&limit
pub async fn list_logs(
    State(state): State<AppState>,
    Path(robot_id): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<LogResponse>>> {
    let service = LogService::new(state.service_context());
    let logs = service.list_logs(&robot_id, page).await?;
    Ok(Json(logs))
}
