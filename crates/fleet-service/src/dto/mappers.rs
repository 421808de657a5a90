//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use fleet_core::entities::{LogEntry, Robot};

use super::responses::{LogResponse, RobotResponse};

// ============================================================================
// Robot Mappers
// ============================================================================

impl From<&Robot> for RobotResponse {
    fn from(robot: &Robot) -> Self {
        Self {
            id: robot.id.clone(),
            name: robot.name.clone(),
            robot_type: robot.robot_type,
            status: robot.status,
            battery: robot.battery,
            location: robot.location.clone(),
            error: robot.error.clone(),
            created_at: robot.created_at,
            updated_at: robot.updated_at,
        }
    }
}

impl From<Robot> for RobotResponse {
    fn from(robot: Robot) -> Self {
        Self {
            id: robot.id,
            name: robot.name,
            robot_type: robot.robot_type,
            status: robot.status,
            battery: robot.battery,
            location: robot.location,
            error: robot.error,
            created_at: robot.created_at,
            updated_at: robot.updated_at,
        }
    }
}

// ============================================================================
// Log Mappers
// ============================================================================

impl From<LogEntry> for LogResponse {
    fn from(entry: LogEntry) -> Self {
        Self {
            id: entry.id,
            robot_id: entry.robot_id,
            message: entry.message,
            level: entry.level,
            source: entry.source,
            meta: entry.meta,
            created_at: entry.created_at,
        }
    }
}
