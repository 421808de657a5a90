//! Database models - SQLx-compatible structs for PostgreSQL tables

mod log;
mod robot;

pub use log::LogModel;
pub use robot::RobotModel;
