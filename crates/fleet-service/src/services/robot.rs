//! Robot service
//!
//! Registration, lookup, listing and status updates. Every successful status
//! update writes the robot first and then appends one system log entry.

use fleet_core::entities::{Robot, RobotStatus, RobotType};
use fleet_core::{ApiKey, DomainError, Page, PageRequest};
use tracing::{error, info, instrument};

use crate::dto::{
    PaginatedResponse, RegisterRobotRequest, RegisterRobotResponse, RobotResponse,
    StatusUpdateResponse, UpdateStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::log::LogService;

/// Robot service
pub struct RobotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RobotService<'a> {
    /// Create a new RobotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new robot and issue its API key
    ///
    /// A duplicate id yields `ServiceError::RobotConflict` with the stored
    /// robot; the stored robot is never overwritten.
    #[instrument(skip(self, request), fields(robot_id = %request.id))]
    pub async fn register(
        &self,
        request: RegisterRobotRequest,
    ) -> ServiceResult<RegisterRobotResponse> {
        let id = request.id.trim();
        let name = request.name.trim();
        if id.is_empty() || name.is_empty() || request.robot_type.is_empty() {
            return Err(ServiceError::validation("id, name and type are required"));
        }

        let robot_type: RobotType = request.robot_type.parse()?;
        // An empty status counts as absent
        let status = match request.status.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => s.parse::<RobotStatus>()?,
            None => RobotStatus::default(),
        };

        let robot = Robot::new(id.to_string(), name.to_string(), robot_type, status);
        let api_key = ApiKey::generate();

        match self.ctx.robot_repo().create(&robot, &api_key).await {
            Ok(()) => {}
            Err(DomainError::RobotAlreadyExists(id)) => {
                info!(robot_id = %id, "Registration rejected, robot already exists");
                let existing = self
                    .ctx
                    .robot_repo()
                    .find_by_id(&id)
                    .await?
                    .ok_or(DomainError::RobotAlreadyExists(id))?;
                return Err(ServiceError::robot_conflict(existing.into()));
            }
            Err(e) => return Err(e.into()),
        }

        info!(robot_id = %robot.id, robot_type = %robot.robot_type, "Robot registered");

        Ok(RegisterRobotResponse::new(
            robot.into(),
            api_key.into_inner(),
        ))
    }

    /// Get a robot by id
    #[instrument(skip(self))]
    pub async fn get_robot(&self, id: &str) -> ServiceResult<RobotResponse> {
        let robot = self
            .ctx
            .robot_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::RobotNotFound(id.to_string()))?;

        Ok(robot.into())
    }

    /// List robots, most recently updated first
    #[instrument(skip(self))]
    pub async fn list_robots(
        &self,
        request: PageRequest,
    ) -> ServiceResult<PaginatedResponse<RobotResponse>> {
        let repo = self.ctx.robot_repo();
        let (robots, total) = tokio::try_join!(
            repo.list(request.offset(), request.limit()),
            repo.count()
        )?;

        Ok(PaginatedResponse::from_page(Page::new(
            robots, total, request,
        )))
    }

    /// Apply a partial status update for an authenticated robot
    ///
    /// The update is committed before the derived log entry is written. If
    /// that write fails the update stays applied and the caller gets an error.
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateStatusRequest,
    ) -> ServiceResult<StatusUpdateResponse> {
        let update = request.into_update()?;

        let robot = self
            .ctx
            .robot_repo()
            .apply_status_update(id, &update)
            .await?
            .ok_or_else(|| DomainError::RobotNotFound(id.to_string()))?;

        info!(
            robot_id = %robot.id,
            status = %robot.status,
            "Robot status updated"
        );

        if let Err(e) = LogService::new(self.ctx)
            .record_status_update(&robot.id, &update)
            .await
        {
            error!(
                robot_id = %robot.id,
                error = %e,
                "Status update committed but its log entry could not be written"
            );
            return Err(ServiceError::internal(format!(
                "status log for {} not written: {e}",
                robot.id
            )));
        }

        Ok(StatusUpdateResponse::new(robot.into()))
    }
}
