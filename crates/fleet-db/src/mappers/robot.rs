//! Robot entity <-> model mapper

use chrono::{DateTime, Utc};
use fleet_core::entities::{Robot, StatusUpdate};
use fleet_core::error::DomainError;
use fleet_core::value_objects::ApiKey;
use serde_json::Value;
use sqlx::types::Json;

use crate::models::RobotModel;

/// Convert RobotModel to Robot entity
impl TryFrom<RobotModel> for Robot {
    type Error = DomainError;

    fn try_from(model: RobotModel) -> Result<Self, Self::Error> {
        Ok(Robot {
            robot_type: model.robot_type.parse().map_err(stored_value)?,
            status: model.status.parse().map_err(stored_value)?,
            id: model.id,
            name: model.name,
            battery: model.battery,
            location: model.location.map(|Json(v)| v),
            error: model.error,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// A row holding a value outside the domain enums is a storage fault, not a client error
fn stored_value(e: DomainError) -> DomainError {
    DomainError::DatabaseError(format!("corrupt robot row: {e}"))
}

/// Robot entity reference prepared for insertion
pub struct RobotInsert<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub robot_type: &'static str,
    pub status: &'static str,
    pub battery: Option<f64>,
    pub location: Option<Json<&'a Value>>,
    pub error: Option<&'a str>,
    pub api_key: &'a str,
}

impl<'a> RobotInsert<'a> {
    pub fn new(robot: &'a Robot, api_key: &'a ApiKey) -> Self {
        Self {
            id: &robot.id,
            name: &robot.name,
            robot_type: robot.robot_type.as_str(),
            status: robot.status.as_str(),
            battery: robot.battery,
            location: robot.location.as_ref().map(Json),
            error: robot.error.as_deref(),
            api_key: api_key.as_str(),
        }
    }
}

/// Bind values for a partial status update.
///
/// `set_*` flags carry "field supplied" so that a supplied `null` can clear a
/// column while an absent field leaves it alone. `updated_at` comes from the
/// application clock, like the timestamps written at registration.
pub struct StatusUpdateParams<'a> {
    pub battery: Option<f64>,
    pub set_location: bool,
    pub location: Option<Json<&'a Value>>,
    pub status: Option<&'static str>,
    pub set_error: bool,
    pub error: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> StatusUpdateParams<'a> {
    pub fn new(update: &'a StatusUpdate) -> Self {
        Self {
            battery: update.battery,
            set_location: update.location.is_some(),
            location: update.location.as_ref().and_then(Option::as_ref).map(Json),
            status: update.effective_status().map(|s| s.as_str()),
            set_error: update.error.is_some(),
            error: update.error.as_ref().and_then(Option::as_deref),
            updated_at: Utc::now(),
        }
    }
}
