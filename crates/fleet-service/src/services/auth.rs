//! Authentication service
//!
//! Binds a caller to exactly one robot by checking the supplied API key
//! against the key stored for that robot.

use fleet_core::DomainError;
use tracing::{debug, instrument, warn};

use crate::dto::RobotResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Authenticate a robot by id and API key.
    ///
    /// Checks, in order: id present, key present, robot exists, key matches.
    /// Blank values count as missing. Returns the robot's public view.
    #[instrument(skip(self, api_key))]
    pub async fn authenticate(
        &self,
        robot_id: Option<&str>,
        api_key: Option<&str>,
    ) -> ServiceResult<RobotResponse> {
        let robot_id = robot_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(DomainError::MissingRobotId)?;
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(DomainError::MissingApiKey)?;

        let stored = self
            .ctx
            .robot_repo()
            .find_api_key(robot_id)
            .await?
            .ok_or_else(|| DomainError::RobotNotFound(robot_id.to_string()))?;

        if !stored.verify(api_key) {
            warn!(robot_id = %robot_id, "Rejected request with invalid API key");
            return Err(DomainError::InvalidApiKey.into());
        }

        let robot = self
            .ctx
            .robot_repo()
            .find_by_id(robot_id)
            .await?
            .ok_or_else(|| DomainError::RobotNotFound(robot_id.to_string()))?;

        debug!(robot_id = %robot_id, "Robot authenticated");
        Ok(robot.into())
    }
}
