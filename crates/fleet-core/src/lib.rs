//! # fleet-core
//!
//! Domain layer containing the robot and log entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    LogEntry, LogLevel, LogSource, NewLogEntry, Robot, RobotStatus, RobotType, StatusUpdate,
};
pub use error::DomainError;
pub use traits::{LogRepository, RepoResult, RobotRepository};
pub use value_objects::{ApiKey, Page, PageMeta, PageRequest};
