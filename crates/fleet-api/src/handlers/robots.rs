//! Robot handlers
//!
//! Registration, lookup, listing and the authenticated status update.

use axum::{
    extract::{Path, State},
    Json,
};
use fleet_service::dto::{
    PaginatedResponse, RegisterRobotRequest, RegisterRobotResponse, RobotResponse,
    StatusUpdateResponse, UpdateStatusRequest,
};
use fleet_service::RobotService;

use crate::extractors::{AuthenticatedRobot, JsonBody, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a robot
///
/// POST /robots
pub async fn register_robot(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRobotRequest>,
) -> ApiResult<Created<Json<RegisterRobotResponse>>> {
    let service = RobotService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// List robots, most recently updated first
///
/// GET /robots?page&limit
pub async fn list_robots(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<RobotResponse>>> {
    let service = RobotService::new(state.service_context());
    let robots = service.list_robots(page).await?;
    Ok(Json(robots))
}

/// Get robot by ID
///
/// GET /robots/{id}
pub async fn get_robot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RobotResponse>> {
    let service = RobotService::new(state.service_context());
    let robot = service.get_robot(&id).await?;
    Ok(Json(robot))
}

/// Update robot status
///
/// PATCH /robots/{id}/status (requires `x-api-key`)
pub async fn update_status(
    State(state): State<AppState>,
    AuthenticatedRobot(robot): AuthenticatedRobot,
    JsonBody(request): JsonBody<UpdateStatusRequest>,
) -> ApiResult<Json<StatusUpdateResponse>> {
    let service = RobotService::new(state.service_context());
    let response = service.update_status(&robot.id, request).await?;
    Ok(Json(response))
}
