//! # fleet-service
//!
//! Application layer: the robot registry, the API-key guard and the log
//! emitter, plus the request/response DTOs they speak.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, LogService, RobotService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
